use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::context::TemplateContext;
use crate::error::{Result, ScaffoldError};
use crate::fsutil;
use crate::template;

/// One unit of project materialization. Paths are relative to the seed root
/// (sources) and the destination root (targets).
#[derive(Debug, Clone)]
pub enum Op {
    /// Byte-identical copy of a whole subtree.
    CopyDir { src: &'static str },
    /// Byte-identical copy of a single file.
    CopyFile { src: &'static str },
    /// Placeholder-substituted copy; the destination may be a renamed path.
    Render { src: &'static str, dest: PathBuf },
    /// Removal of a generically-named placeholder file once its renamed
    /// counterpart has been written.
    Delete { dest: PathBuf },
}

impl Op {
    fn describe(&self) -> String {
        match self {
            Op::CopyDir { src } => format!("copy {src}/"),
            Op::CopyFile { src } => format!("copy {src}"),
            Op::Render { src, dest } => format!("render {src} -> {}", dest.display()),
            Op::Delete { dest } => format!("delete {}", dest.display()),
        }
    }
}

/// The fixed writing-stage manifest. Ordering matters: each delete follows
/// the render that produced its replacement.
pub fn writing_manifest(ctx: &TemplateContext) -> Vec<Op> {
    let env_dest = PathBuf::from("conf").join(format!("{}.env", ctx.app_name));
    let jmx_dest =
        PathBuf::from("test/integration").join(format!("{}_api.jmx", ctx.app_name_underscored()));
    let dist_dest = PathBuf::from("dist").join(&ctx.app_name);

    vec![
        Op::CopyDir { src: "app" },
        Op::CopyDir { src: "conf" },
        Op::CopyDir { src: "project" },
        Op::CopyDir { src: "public" },
        Op::CopyDir { src: "test" },
        Op::CopyFile { src: ".gitignore" },
        Op::Render {
            src: "build.sbt",
            dest: PathBuf::from("build.sbt"),
        },
        Op::Render {
            src: "app/controllers/Application.scala",
            dest: PathBuf::from("app/controllers/Application.scala"),
        },
        Op::Render {
            src: "conf/prod-logger.xml",
            dest: PathBuf::from("conf/prod-logger.xml"),
        },
        Op::Render {
            src: "conf/seed.env",
            dest: env_dest,
        },
        Op::Delete {
            dest: PathBuf::from("conf/seed.env"),
        },
        Op::Render {
            src: "README.md",
            dest: PathBuf::from("README.md"),
        },
        Op::Render {
            src: "conf/application.conf",
            dest: PathBuf::from("conf/application.conf"),
        },
        // dist/seed stays behind on purpose; only the renamed copy is added.
        Op::Render {
            src: "dist/seed",
            dest: dist_dest,
        },
        Op::Render {
            src: "test/integration/seed.jmx",
            dest: jmx_dest,
        },
        Op::Delete {
            dest: PathBuf::from("test/integration/seed.jmx"),
        },
        Op::Render {
            src: "project/plugins.sbt",
            dest: PathBuf::from("project/plugins.sbt"),
        },
        Op::Render {
            src: "project/build.properties",
            dest: PathBuf::from("project/build.properties"),
        },
        Op::CopyFile {
            src: "CONTRIBUTING.md",
        },
    ]
}

/// A sub-operation that was abandoned, with the reason.
#[derive(Debug)]
pub struct Failure {
    pub op: String,
    pub error: ScaffoldError,
}

/// Outcome of a materialization pass. Failures are recorded, not raised:
/// one broken seed file should not take the remaining operations with it.
#[derive(Debug, Default)]
pub struct Report {
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Walks the staged seed and produces the destination project tree.
pub struct Materializer {
    seed_root: PathBuf,
    dest_root: PathBuf,
    strict: bool,
}

impl Materializer {
    pub fn new(seed_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            seed_root: seed_root.into(),
            dest_root: dest_root.into(),
            strict: false,
        }
    }

    /// Abort on the first failed sub-operation instead of continuing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Copies the whole staged seed into the destination root, so the
    /// metadata manifests (and everything else) exist before patching.
    pub fn copy_seed(&self) -> Result<()> {
        fsutil::copy_tree(&self.seed_root, &self.dest_root)
    }

    /// Overwrites `name`, `description` and `author` in the two metadata
    /// manifests at the destination root. A merge-patch, not a template.
    pub fn patch_manifests(
        &self,
        name: &str,
        description: &str,
        author: &str,
    ) -> Result<Report> {
        let mut report = Report::default();
        for manifest in ["package.json", "bower.json"] {
            let path = self.dest_root.join(manifest);
            if let Err(error) = patch_manifest(&path, name, description, author) {
                if self.strict {
                    return Err(error);
                }
                report.failures.push(Failure {
                    op: format!("patch {manifest}"),
                    error,
                });
            }
        }
        Ok(report)
    }

    /// Applies the writing-stage manifest.
    pub fn write(&self, ctx: &TemplateContext) -> Result<Report> {
        let mut report = Report::default();
        for op in writing_manifest(ctx) {
            if let Err(error) = self.apply(&op, ctx) {
                if self.strict {
                    return Err(error);
                }
                report.failures.push(Failure {
                    op: op.describe(),
                    error,
                });
            }
        }
        Ok(report)
    }

    fn apply(&self, op: &Op, ctx: &TemplateContext) -> Result<()> {
        match op {
            Op::CopyDir { src } => {
                fsutil::copy_tree(&self.seed_root.join(src), &self.dest_root.join(src))
            }
            Op::CopyFile { src } => {
                fsutil::copy_file(&self.seed_root.join(src), &self.dest_root.join(src))
            }
            Op::Render { src, dest } => {
                let content = fsutil::read_file(&self.seed_root.join(src))?;
                fsutil::write_file(&self.dest_root.join(dest), &template::render(&content, ctx))
            }
            Op::Delete { dest } => {
                let path = self.dest_root.join(dest);
                fs::remove_file(&path).map_err(|e| ScaffoldError::io(path, e))
            }
        }
    }
}

fn patch_manifest(path: &Path, name: &str, description: &str, author: &str) -> Result<()> {
    let content = fsutil::read_file(path)?;
    let mut doc: Value = serde_json::from_str(&content).map_err(|e| ScaffoldError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    let object = doc.as_object_mut().ok_or_else(|| ScaffoldError::NotAnObject {
        path: path.to_path_buf(),
    })?;
    object.insert("name".to_string(), Value::String(name.to_string()));
    object.insert("description".to_string(), Value::String(description.to_string()));
    object.insert("author".to_string(), Value::String(author.to_string()));

    let rendered = serde_json::to_string_pretty(&doc).expect("JSON value always serializes");
    fsutil::write_file(path, &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{keys, ConfigStore};

    fn ctx(app_name: &str) -> TemplateContext {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::load_or_default(dir.path()).unwrap();
        store.set(keys::APP_NAME, app_name);
        store.set(keys::APP_DESCRIPTION, "A test project");
        store.set(keys::APP_AUTHOR, "Jane <jane@example.com>");
        store.set(keys::PORT_NUMBER, "9000");
        store.set(keys::PLAY_VERSION, "2.5.3");
        store.set(keys::SCALA_VERSION, "2.11.8");
        store.set(keys::LANGUAGE, "PlayScala");
        store.set(keys::SBT_VERSION, "0.13.11");
        store.set(keys::LANGS, "en");
        TemplateContext::from_store(&store).unwrap()
    }

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn fixture_seed(root: &Path) {
        write(&root.join("build.sbt"), "name := \"{{appName}}\"\nscalaVersion := \"{{scalaVersion}}\"\nlazy val root = project.enablePlugins({{language}})");
        write(&root.join("app/controllers/Application.scala"), "package controllers // {{appName}}");
        write(&root.join("app/models/User.scala"), "case class User(name: String)");
        write(&root.join("conf/prod-logger.xml"), "<logger app=\"{{appName}}\"/>");
        write(&root.join("conf/seed.env"), "APP={{appName}}\nPORT={{portNumber}}");
        write(&root.join("conf/application.conf"), "play.i18n.langs = [\"{{langs}}\"]");
        write(&root.join("project/plugins.sbt"), "addSbtPlugin(\"com.typesafe.play\" % \"sbt-plugin\" % \"{{playVersion}}\")");
        write(&root.join("project/build.properties"), "sbt.version={{sbtVersion}}");
        write(&root.join("public/robots.txt"), "User-agent: *");
        write(&root.join("test/ApplicationSpec.scala"), "class ApplicationSpec");
        write(&root.join("test/integration/seed.jmx"), "<jmeterTestPlan app=\"{{appName}}\"/>");
        write(&root.join("dist/seed"), "#!/bin/sh\nexec {{appName}}");
        write(&root.join(".gitignore"), "target/");
        write(&root.join("README.md"), "# {{appName}}");
        write(&root.join("CONTRIBUTING.md"), "Be nice.");
        write(&root.join("package.json"), "{\"name\":\"seed\",\"description\":\"seed\",\"author\":\"seed\",\"scripts\":{\"postinstall\":\"bower install\"}}");
        write(&root.join("bower.json"), "{\"name\":\"seed\",\"description\":\"seed\",\"author\":\"seed\"}");
    }

    #[test]
    fn full_pass_produces_the_project_tree() {
        let seed = tempfile::tempdir().unwrap();
        fixture_seed(seed.path());
        let dest = tempfile::tempdir().unwrap();

        let m = Materializer::new(seed.path(), dest.path());
        m.copy_seed().unwrap();
        let report = m.write(&ctx("my-cool-app")).unwrap();
        assert!(report.is_clean(), "{:?}", report.failures);

        let build = fs::read_to_string(dest.path().join("build.sbt")).unwrap();
        assert!(build.contains("name := \"my-cool-app\""));
        assert!(build.contains("scalaVersion := \"2.11.8\""));
        assert!(build.contains("enablePlugins(PlayScala)"));

        let env = fs::read_to_string(dest.path().join("conf/my-cool-app.env")).unwrap();
        assert_eq!(env, "APP=my-cool-app\nPORT=9000");
        assert!(!dest.path().join("conf/seed.env").exists());

        assert!(dest.path().join("test/integration/my_cool_app_api.jmx").exists());
        assert!(!dest.path().join("test/integration/seed.jmx").exists());

        // static assets arrive byte-identical
        assert_eq!(
            fs::read_to_string(dest.path().join("app/models/User.scala")).unwrap(),
            "case class User(name: String)"
        );
        assert_eq!(
            fs::read_to_string(dest.path().join("public/robots.txt")).unwrap(),
            "User-agent: *"
        );
        assert_eq!(
            fs::read_to_string(dest.path().join("CONTRIBUTING.md")).unwrap(),
            "Be nice."
        );
    }

    #[test]
    fn dist_placeholder_is_renamed_but_not_deleted() {
        let seed = tempfile::tempdir().unwrap();
        fixture_seed(seed.path());
        let dest = tempfile::tempdir().unwrap();

        let m = Materializer::new(seed.path(), dest.path());
        m.copy_seed().unwrap();
        m.write(&ctx("demo")).unwrap();

        assert_eq!(
            fs::read_to_string(dest.path().join("dist/demo")).unwrap(),
            "#!/bin/sh\nexec demo"
        );
        assert!(dest.path().join("dist/seed").exists());
    }

    #[test]
    fn patch_overwrites_only_the_three_fields() {
        let seed = tempfile::tempdir().unwrap();
        fixture_seed(seed.path());
        let dest = tempfile::tempdir().unwrap();

        let m = Materializer::new(seed.path(), dest.path());
        m.copy_seed().unwrap();
        let report = m
            .patch_manifests("demo", "A demo", "Jane <jane@example.com>")
            .unwrap();
        assert!(report.is_clean());

        let pkg: Value =
            serde_json::from_str(&fs::read_to_string(dest.path().join("package.json")).unwrap())
                .unwrap();
        assert_eq!(pkg["name"], "demo");
        assert_eq!(pkg["description"], "A demo");
        assert_eq!(pkg["author"], "Jane <jane@example.com>");
        // untouched fields survive the rewrite
        assert_eq!(pkg["scripts"]["postinstall"], "bower install");

        let bower: Value =
            serde_json::from_str(&fs::read_to_string(dest.path().join("bower.json")).unwrap())
                .unwrap();
        assert_eq!(bower["name"], "demo");
    }

    #[test]
    fn failed_operation_is_recorded_and_siblings_continue() {
        let seed = tempfile::tempdir().unwrap();
        fixture_seed(seed.path());
        // break one render source
        fs::remove_file(seed.path().join("conf/prod-logger.xml")).unwrap();
        let dest = tempfile::tempdir().unwrap();

        let m = Materializer::new(seed.path(), dest.path());
        m.copy_seed().unwrap();
        let report = m.write(&ctx("demo")).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].op.contains("prod-logger.xml"));
        // later operations still ran
        assert!(dest.path().join("conf/demo.env").exists());
        assert!(dest.path().join("project/plugins.sbt").exists());
    }

    #[test]
    fn strict_mode_aborts_on_first_failure() {
        let seed = tempfile::tempdir().unwrap();
        fixture_seed(seed.path());
        fs::remove_file(seed.path().join("conf/prod-logger.xml")).unwrap();
        let dest = tempfile::tempdir().unwrap();

        let m = Materializer::new(seed.path(), dest.path()).strict(true);
        m.copy_seed().unwrap();
        assert!(m.write(&ctx("demo")).is_err());
    }

    #[test]
    fn missing_manifest_is_a_recorded_patch_failure() {
        let seed = tempfile::tempdir().unwrap();
        fixture_seed(seed.path());
        let dest = tempfile::tempdir().unwrap();

        let m = Materializer::new(seed.path(), dest.path());
        m.copy_seed().unwrap();
        fs::remove_file(dest.path().join("bower.json")).unwrap();

        let report = m
            .patch_manifests("demo", "A demo", "Jane <jane@example.com>")
            .unwrap();
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].op.contains("bower.json"));
        // package.json was still patched
        let pkg: Value =
            serde_json::from_str(&fs::read_to_string(dest.path().join("package.json")).unwrap())
                .unwrap();
        assert_eq!(pkg["name"], "demo");
    }

    #[test]
    fn deletes_run_after_their_replacement_renders() {
        let manifest = writing_manifest(&ctx("demo"));
        let render_env = manifest
            .iter()
            .position(|op| matches!(op, Op::Render { src, .. } if *src == "conf/seed.env"))
            .unwrap();
        let delete_env = manifest
            .iter()
            .position(|op| {
                matches!(op, Op::Delete { dest } if dest == &PathBuf::from("conf/seed.env"))
            })
            .unwrap();
        assert!(render_env < delete_env);

        let render_jmx = manifest
            .iter()
            .position(|op| matches!(op, Op::Render { src, .. } if *src == "test/integration/seed.jmx"))
            .unwrap();
        let delete_jmx = manifest
            .iter()
            .position(|op| {
                matches!(op, Op::Delete { dest } if dest == &PathBuf::from("test/integration/seed.jmx"))
            })
            .unwrap();
        assert!(render_jmx < delete_jmx);
    }
}
