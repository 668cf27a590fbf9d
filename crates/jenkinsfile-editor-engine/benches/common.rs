// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_pipeline(stages: usize) -> String {
    let mut content = String::from("pipeline {\n    agent any\n    stages {\n");
    for i in 0..stages {
        content.push_str(&format!(
            "        stage('Stage {i}') {{\n            steps {{\n                step_{i}()\n                sh '''\n                    make target_{i}\n                '''\n            }}\n        }}\n"
        ));
    }
    content.push_str("    }\n}\n");
    content
}
