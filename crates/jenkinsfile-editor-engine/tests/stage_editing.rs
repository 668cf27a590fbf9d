use jenkinsfile_editor_engine::{EditError, Jenkinsfile};
use pretty_assertions::assert_eq;

const ORIGINAL: &str = "
pipeline {
    agent any
    stages {
        stage('Build') {
            steps {
                echo 'Building..'
            }
        }
        stage('Test') {
            steps {
                echo 'Testing..'
            }
        }
        stage('Old') {
            steps {
                oldFunction()
            }
        }
    }
}
";

#[test]
fn insert_new_stage_before_old_function() {
    let mut doc = Jenkinsfile::parse(ORIGINAL).unwrap();

    let index = doc.find_stage_index("oldFunction()").unwrap();
    doc.insert_stage("New", &["newFunction()"], index).unwrap();

    let expected = "\
pipeline {
    agent any
    stages {
        stage('Build') {
            steps {
                echo 'Building..'
            }
        }
        stage('Test') {
            steps {
                echo 'Testing..'
            }
        }
        stage('New') {
            steps {
                newFunction()
            }
        }
        stage('Old') {
            steps {
                oldFunction()
            }
        }
    }
}
";
    assert_eq!(doc.render(), expected);
}

#[test]
fn inserted_stage_is_findable() {
    let mut doc = Jenkinsfile::parse(ORIGINAL).unwrap();
    doc.insert_stage("Lint", &["npm run lint", "npm test"], 0)
        .unwrap();

    assert_eq!(doc.find_stage_index("npm test"), Some(0));
    assert_eq!(doc.find_stage_index("oldFunction()"), Some(3));
    assert_eq!(doc.stage_names(), vec!["Lint", "Build", "Test", "Old"]);
}

#[test]
fn out_of_range_insert_leaves_document_untouched() {
    let mut doc = Jenkinsfile::parse(ORIGINAL).unwrap();
    let before = doc.render();

    let result = doc.insert_stage("Late", &["late()"], 4);

    assert_eq!(result, Err(EditError::IndexOutOfRange { index: 4, len: 3 }));
    assert_eq!(doc.render(), before);
}

#[test]
fn scripted_pipeline_has_no_stage_container() {
    let mut doc = Jenkinsfile::parse("node {\n    stage('Build') {\n        sh 'make'\n    }\n}\n").unwrap();

    assert_eq!(doc.find_stage_index("make"), None);
    assert_eq!(
        doc.insert_stage("New", &["x()"], 0),
        Err(EditError::StageContainerNotFound)
    );
}
