//! Specs for `affirm suite`.

use crate::prelude::*;

const SUITE_DIR: &str = "force-app/main/default/testSuites";

fn suite_file(name: &str) -> String {
    format!("{}/{}.testSuite-meta.xml", SUITE_DIR, name)
}

#[test]
fn creates_suite_in_default_package() {
    let temp = Project::sfdx();

    affirm("suite")
        .args(&["-t", "ATest.cls, BTest", "-n", "MySuite"])
        .pwd(temp.path())
        .passes()
        .stdout_has("Test suite written to");

    similar_asserts::assert_eq!(
        temp.read(suite_file("MySuite")),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <ApexTestSuite xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n    \
         <testClassName>ATest</testClassName>\n    \
         <testClassName>BTest</testClassName>\n\
         </ApexTestSuite>\n"
    );
}

#[test]
fn existing_suite_is_kept_without_flags() {
    let temp = Project::sfdx();
    affirm("suite")
        .args(&["-t", "ATest", "-n", "MySuite"])
        .pwd(temp.path())
        .passes();
    let before = temp.read(suite_file("MySuite"));

    affirm("suite")
        .args(&["-t", "BTest", "-n", "MySuite"])
        .pwd(temp.path())
        .passes()
        .stdout_has("Found existing suite")
        .stdout_has("Keeping existing test suite MySuite");

    assert_eq!(temp.read(suite_file("MySuite")), before);
}

#[test]
fn addtotests_merges_into_existing_suite() {
    let temp = Project::sfdx();
    affirm("suite")
        .args(&["-t", "ATest,BTest", "-n", "MySuite"])
        .pwd(temp.path())
        .passes();

    affirm("suite")
        .args(&["-t", "BTest,CTest", "-n", "MySuite", "--addtotests"])
        .pwd(temp.path())
        .passes();

    let content = temp.read(suite_file("MySuite"));
    assert_eq!(content.matches("<testClassName>").count(), 3);
    assert!(content.contains("<testClassName>CTest</testClassName>"));
}

#[test]
fn overwrite_replaces_existing_suite() {
    let temp = Project::sfdx();
    affirm("suite")
        .args(&["-t", "ATest", "-n", "MySuite"])
        .pwd(temp.path())
        .passes();

    affirm("suite")
        .args(&["-t", "BTest", "-n", "MySuite", "--overwrite"])
        .pwd(temp.path())
        .passes();

    let content = temp.read(suite_file("MySuite"));
    assert!(!content.contains("ATest"));
    assert!(content.contains("BTest"));
}

#[test]
fn default_name_comes_from_branch() {
    let temp = Project::sfdx();
    git_init(&temp);
    git_commit_all(&temp, "feat: initial commit");
    git_branch(&temp, "feature/ABC-123-add-widget");

    affirm("suite")
        .args(&["-t", "WidgetTest"])
        .pwd(temp.path())
        .passes();

    assert!(temp.read(suite_file("ABC_123_add_widget")).contains("WidgetTest"));
}

#[test]
fn outputdir_overrides_location() {
    let temp = Project::sfdx();

    affirm("suite")
        .args(&["-t", "ATest", "-n", "MySuite", "-o", "suites"])
        .pwd(temp.path())
        .passes();

    assert!(temp.read("suites/MySuite.testSuite-meta.xml").contains("ATest"));
}

#[test]
fn config_output_dir_is_relative_to_config() {
    let temp = Project::empty();
    temp.config("[suite]\noutput_dir = \"manifest/suites\"\n");
    temp.file("sub/.keep", "");

    affirm("suite")
        .args(&["-t", "ATest", "-n", "MySuite"])
        .pwd(temp.path().join("sub"))
        .passes();

    assert!(temp.read("manifest/suites/MySuite.testSuite-meta.xml").contains("ATest"));
}

#[test]
fn too_long_name_fails() {
    let temp = Project::sfdx();

    affirm("suite")
        .args(&["-t", "ATest", "-n", "ThisSuiteNameIsFarLongerThanAllowed1"])
        .pwd(temp.path())
        .exits(1)
        .stderr_has("too long");
}

#[test]
fn new_suite_without_tests_fails() {
    let temp = Project::sfdx();

    affirm("suite")
        .args(&["-n", "MySuite"])
        .pwd(temp.path())
        .exits(1)
        .stderr_has("no tests provided");
}

#[test]
fn missing_project_file_is_config_error() {
    let temp = Project::empty();
    temp.file(".git/HEAD", "ref: refs/heads/main\n");

    affirm("suite")
        .args(&["-t", "ATest", "-n", "MySuite"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("sfdx-project.json not found");
}
