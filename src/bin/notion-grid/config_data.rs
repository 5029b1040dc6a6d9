use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;

const CONFIG_SAMPLE: &str = r#"[server]
address = "0.0.0.0"
port = 3000

# Token and database id can also come from the environment:
# NOTION_TOKEN / NOTION_API_TOKEN / NOTION_SECRET / NOTION_API_KEY
# NOTION_DATABASE_ID / NOTION_DB_ID / NOTION_DB / NOTION_CONTENT_DB_ID
[notion]
# token = "secret_..."
# database_id = "..."
# api_base = "https://api.notion.com/v1"
# notion_version = "2022-06-28"
detect_schema = true

# For the file location, if you want it to be relative to the executable directory
# use ${exe_dir}/location
[log]
level = "Info"
log_to_console = true
# location = "${exe_dir}/log/server.log"
"#;

pub(crate) fn write_sample_cfg(file_path: &PathBuf) -> io::Result<()> {
    let mut file = File::create(file_path)?;
    file.write_all(CONFIG_SAMPLE.as_bytes())
}

#[cfg(test)]
mod tests {
    use notion_grid::config::parse_config;

    use super::*;

    #[test]
    fn test_sample_parses() {
        let cfg = parse_config(CONFIG_SAMPLE).unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert!(cfg.notion.detect_schema());
        assert!(cfg.log.is_some());
    }
}
