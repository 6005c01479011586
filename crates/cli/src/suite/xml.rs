// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `ApexTestSuite` metadata documents.

const ROOT: &str = "ApexTestSuite";
const TEST_ELEMENT: &str = "testClassName";
const NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

/// The test classes of one suite, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    tests: Vec<String>,
}

impl TestSuite {
    /// Build a suite, dropping repeated names.
    pub fn new(tests: impl IntoIterator<Item = String>) -> Self {
        let mut suite = Self::default();
        suite.merge(tests);
        suite
    }

    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    /// Append tests not already present. Returns how many were added.
    pub fn merge(&mut self, tests: impl IntoIterator<Item = String>) -> usize {
        let before = self.tests.len();
        for test in tests {
            if !self.tests.contains(&test) {
                self.tests.push(test);
            }
        }
        self.tests.len() - before
    }

    /// Parse a suite document.
    pub fn parse(content: &str) -> Result<Self, String> {
        let doc = roxmltree::Document::parse(content).map_err(|e| e.to_string())?;
        let root = doc.root_element();
        if root.tag_name().name() != ROOT {
            return Err(format!(
                "expected <{}> root element, found <{}>",
                ROOT,
                root.tag_name().name()
            ));
        }

        let tests = root
            .children()
            .filter(|node| node.is_element() && node.tag_name().name() == TEST_ELEMENT)
            .filter_map(|node| node.text())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from);
        Ok(Self::new(tests))
    }

    /// Render the suite document.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!("<{} xmlns=\"{}\">\n", ROOT, NAMESPACE));
        for test in &self.tests {
            out.push_str(&format!(
                "    <{}>{}</{}>\n",
                TEST_ELEMENT,
                escape(test),
                TEST_ELEMENT
            ));
        }
        out.push_str(&format!("</{}>\n", ROOT));
        out
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
