//! JavaScript (Node.js) generation

use super::{HEADER_BINDING, Target, front_matter_literal};
use crate::front_matter::FrontMatter;
use crate::template::render_static;

const BASE_IMPORT: &str = "let fse = require('fs-extra')\n";

const TRIGGER_IMPORT: &str = "const trigger = require('trinkets/triggers');\n";

const STORAGE_TEMPLATE: &str = "let FileSync = require('lowdb/adapters/FileSync')
fse.ensureDirSync('dbs/')
const db = require('lowdb')(new FileSync('dbs/{{id}}.json'));";

const LOGGING_TEMPLATE: &str = "let pinoStream = require('pino-multi-stream')
fse.ensureDirSync('logs/')
const log = pinoStream({
  base: null,
  streams: [{ stream: require('fs').createWriteStream('logs/{{id}}.log') }]
});";

/// Node.js target: lowdb for storage, pino for logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScript;

impl Target for JavaScript {
    fn tag(&self) -> &'static str {
        "js"
    }

    fn header(&self, front: &FrontMatter) -> String {
        format!("const {} = {}", HEADER_BINDING, front_matter_literal(front))
    }

    /// `fs-extra`, then storage and logging setup when enabled, then the
    /// trigger runtime. Each setup fragment is framed by blank lines.
    fn imports(&self, front: &FrontMatter) -> String {
        let mut out = String::from(BASE_IMPORT);
        if front.db {
            out.push('\n');
            out.push_str(&self.storage_fragment(front));
            out.push('\n');
        }
        if front.log {
            out.push('\n');
            out.push_str(&self.logging_fragment(front));
            out.push('\n');
        }
        out.push_str(TRIGGER_IMPORT);
        out
    }

    fn storage_fragment(&self, front: &FrontMatter) -> String {
        render_static(STORAGE_TEMPLATE, front)
    }

    fn logging_fragment(&self, front: &FrontMatter) -> String {
        render_static(LOGGING_TEMPLATE, front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header() {
        let header = JavaScript.header(&FrontMatter::new("svc1").with_db(true));
        assert_eq!(
            header,
            "const spinal = {\n  \"id\": \"svc1\",\n  \"db\": true,\n  \"log\": false\n}"
        );
    }

    #[test]
    fn test_imports_without_fragments() {
        let imports = JavaScript.imports(&FrontMatter::new("svc1"));
        assert_eq!(
            imports,
            "let fse = require('fs-extra')\nconst trigger = require('trinkets/triggers');\n"
        );
    }

    #[test]
    fn test_imports_with_storage() {
        let imports = JavaScript.imports(&FrontMatter::new("svc1").with_db(true));
        let expected = "let fse = require('fs-extra')

let FileSync = require('lowdb/adapters/FileSync')
fse.ensureDirSync('dbs/')
const db = require('lowdb')(new FileSync('dbs/svc1.json'));
const trigger = require('trinkets/triggers');
";
        assert_eq!(imports, expected);
    }

    #[test]
    fn test_imports_with_storage_and_logging() {
        let imports = JavaScript.imports(&FrontMatter::new("bot").with_db(true).with_log(true));
        let db_at = imports.find("dbs/bot.json").expect("storage fragment");
        let log_at = imports.find("logs/bot.log").expect("logging fragment");
        let trigger_at = imports.find("trinkets/triggers").expect("trigger import");
        assert!(imports.starts_with(BASE_IMPORT));
        assert!(db_at < log_at && log_at < trigger_at);
        assert!(imports.contains(");\n\nlet pinoStream"));
    }

    #[test]
    fn test_logging_fragment() {
        let fragment = JavaScript.logging_fragment(&FrontMatter::new("svc1"));
        let expected = "let pinoStream = require('pino-multi-stream')
fse.ensureDirSync('logs/')
const log = pinoStream({
  base: null,
  streams: [{ stream: require('fs').createWriteStream('logs/svc1.log') }]
});";
        assert_eq!(fragment, expected);
    }

    #[test]
    fn test_storage_path_follows_declared_id() {
        let renamed = FrontMatter::new("svc1").with_db(true).with_field("id", "other");
        assert!(JavaScript.imports(&renamed).contains("new FileSync('dbs/other.json')"));

        let mut shadowed = FrontMatter::new("svc1").with_db(true);
        shadowed.extra.insert("id".into(), "other".into());
        let imports = JavaScript.imports(&shadowed);
        assert!(imports.contains("new FileSync('dbs/svc1.json')"));
        assert!(!imports.contains("other"));
    }

    #[test]
    fn test_header_has_no_duplicate_keys() {
        let mut front = FrontMatter::new("svc1").with_field("db", true);
        front.extra.insert("log".into(), true.into());
        let header = JavaScript.header(&front);
        assert_eq!(header.matches("\"db\"").count(), 1);
        assert_eq!(header.matches("\"log\"").count(), 1);
        assert!(header.contains("\"db\": true"));
        assert!(JavaScript.imports(&front).contains("lowdb"));
    }

    #[test]
    fn test_no_shebang() {
        assert_eq!(JavaScript.shebang(), None);
    }
}
