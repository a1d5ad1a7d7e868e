use std::path::Path;

use crate::{
    InitArgs,
    config::{DEFAULT_CONFIG_FILE, RootConfig},
};

const INDEX_PAGE: &str = r#"---
title: 'Home'
template: 'default'
---
# Welcome

This page was generated by `mdsite init`. Edit `files/index.md` to change it.

## Writing pages

Link to other pages with their source name, like [this page](index.md).

```python
print("hello")
```
"#;

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="/{{ scripts_folder }}/style.css">
</head>
<body>
  <nav>{{ toc }}</nav>
  <main>{{ content }}</main>
</body>
</html>
"#;

const STYLESHEET: &str = r#"body { font-family: sans-serif; max-width: 48rem; margin: 0 auto; }
.toc { font-size: 0.9rem; }
pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }
"#;

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    println!("Initializing project in {}", path.display());
    scaffold(&path).await
}

/// Write the starter files, leaving existing ones untouched.
async fn scaffold(path: &Path) -> Result<(), anyhow::Error> {
    let config = RootConfig::default();
    let config_text = serde_yaml::to_string(&config)?;

    let files = [
        (path.join(DEFAULT_CONFIG_FILE), config_text.as_str()),
        (config.site.input.join("index.md"), INDEX_PAGE),
        (
            config
                .site
                .input
                .join(&config.site.scripts_folder)
                .join("style.css"),
            STYLESHEET,
        ),
        (
            config
                .site
                .templates
                .join(format!("{}.html", config.site.default_template)),
            DEFAULT_TEMPLATE,
        ),
    ];

    for (file, content) in files {
        let file = path.join(file);
        if file.exists() {
            println!("Keeping existing {}", file.display());
            continue;
        }
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file, content).await?;
        println!("Created {}", file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Builder;

    #[tokio::test]
    async fn test_scaffold_builds() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path()).await.unwrap();

        assert!(dir.path().join("site.yaml").exists());
        assert!(dir.path().join("files/scripts/style.css").exists());

        let config = RootConfig::load_from_file(&dir.path().join("site.yaml"))
            .await
            .unwrap();
        let result = Builder::new(config, dir.path().to_path_buf()).build().unwrap();
        assert_eq!(result.documents, 1);
        assert_eq!(result.static_files, 1);

        let html = std::fs::read_to_string(dir.path().join("output/index.html")).unwrap();
        assert!(html.contains("<h1 id=\"heading-0\">Welcome</h1>"));
        assert!(html.contains("<a href=\"index.html\">this page</a>"));
        assert!(html.contains("href=\"/scripts/style.css\""));
    }

    #[tokio::test]
    async fn test_scaffold_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("files")).unwrap();
        std::fs::write(dir.path().join("files/index.md"), "mine").unwrap();

        scaffold(dir.path()).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("files/index.md")).unwrap(),
            "mine"
        );
    }
}
