//! The `examtrack init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("examtrack.toml").exists() {
        println!("examtrack.toml already exists, skipping.");
    } else {
        std::fs::write("examtrack.toml", SAMPLE_CONFIG)?;
        println!("Created examtrack.toml");
    }

    std::fs::create_dir_all("submissions")?;
    let example_path = std::path::Path::new("submissions/example.toml");
    if example_path.exists() {
        println!("submissions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SUBMISSION)?;
        println!("Created submissions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Fill in submissions/example.toml with your answer counts");
    println!("  2. Run: examtrack validate --submission submissions/example.toml");
    println!("  3. Run: examtrack evaluate --submission submissions/example.toml --record");
    println!("  4. Run: examtrack analyze");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examtrack configuration

history_path = "examtrack-history.json"
default_selector = "quantitative"
default_category = "anatolian"
default_format = "text"
# stats_window = 10
"#;

const EXAMPLE_SUBMISSION: &str = r#"[exam]
name = "Mock exam 1"
date = "2026-03-14"
selector = "quantitative"

[merit]
base_value = 85.0
category = "anatolian"

[first]
turkish = { correct = 32, incorrect = 4 }
basic-mathematics = { correct = 25, incorrect = 8 }
science = { correct = 12, incorrect = 4 }
social-sciences = { correct = 15, incorrect = 3 }

[second]
mathematics = { correct = 30, incorrect = 5 }
physics = { correct = 10, incorrect = 2 }
chemistry = { correct = 9, incorrect = 3 }
biology = { correct = 8, incorrect = 4 }
"#;
