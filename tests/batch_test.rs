use anyhow::Result;
use glsl2h::config::manifest::BatchConfig;
use glsl2h::utils::validation::Validate;
use glsl2h::{BatchRunner, LocalStorage};
use std::process::Command;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[output]
directory = "generated"

[[shaders]]
source = "shaders/sprite.vert"
variable = "spriteVert"
header = "sprite_vert.h"

[[shaders]]
source = "shaders/sprite.frag"
variable = "spriteFrag"
style = "array"
"#;

fn write_project(temp_dir: &TempDir) -> Result<()> {
    let shaders = temp_dir.path().join("shaders");
    std::fs::create_dir_all(&shaders)?;
    std::fs::write(shaders.join("sprite.vert"), "in vec2 uv;\nvoid main() {}\n")?;
    std::fs::write(shaders.join("sprite.frag"), "// ünïcode\nvoid main() {}")?;
    std::fs::write(temp_dir.path().join("shaders.toml"), MANIFEST)?;
    Ok(())
}

#[test]
fn test_batch_runner_generates_every_header() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_project(&temp_dir)?;

    let config = BatchConfig::from_file(temp_dir.path().join("shaders.toml"))?;
    config.validate()?;

    let runner = BatchRunner::new(LocalStorage::new(temp_dir.path()), config.jobs());
    let results = runner.run()?;
    assert_eq!(results.len(), 2);

    let vert = std::fs::read_to_string(temp_dir.path().join("generated/sprite_vert.h"))?;
    assert_eq!(
        vert,
        "#ifndef SPRITE_VERT_H\n#define SPRITE_VERT_H\n\n\
         const char* spriteVert = \n\
         \"in vec2 uv;\\n\"\n\
         \"void main() {}\\n\"\n\
         ;\n\n#endif // SPRITE_VERT_H\n"
    );

    let frag = std::fs::read_to_string(temp_dir.path().join("generated/spriteFrag.h"))?;
    assert!(frag.contains("const char spriteFrag[] = \n"));
    // non-ASCII bytes are written as octal escapes
    assert!(frag.contains("\"// \\303\\274n\\303\\257code\\n\"\n"));
    assert!(frag.contains("\"void main() {}\\n\"\n;\n"));
    Ok(())
}

#[test]
fn test_batch_binary_runs_manifest() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_project(&temp_dir)?;

    let output = Command::new(env!("CARGO_BIN_EXE_glsl2h-batch"))
        .arg("--config")
        .arg(temp_dir.path().join("shaders.toml"))
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert!(temp_dir.path().join("generated/sprite_vert.h").exists());
    assert!(temp_dir.path().join("generated/spriteFrag.h").exists());
    Ok(())
}

#[test]
fn test_batch_binary_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_project(&temp_dir)?;

    let output = Command::new(env!("CARGO_BIN_EXE_glsl2h-batch"))
        .arg("--dry-run")
        .arg("--config")
        .arg(temp_dir.path().join("shaders.toml"))
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("spriteVert"));
    assert!(stdout.contains("2 headers would be generated"));
    assert!(!temp_dir.path().join("generated").exists());
    Ok(())
}
