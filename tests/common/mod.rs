//! Shared testing utilities for campaign-genie integration tests.

use assert_cmd::Command;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CAMPAIGN_REPLY: &str = "Brew Together: every cup starts a conversation.";
pub const POSTS_REPLY: &str = "1. Caption: Morning ritual ☕✨\n\
Image Description: A steaming mug on a sunny Austin balcony\n\n\
2. Caption: Weekend vibes 🎶\n\
Image Description: Friends sharing coffee at an outdoor concert";
pub const RECOMMENDATION_REPLY: &str = "Partner with ACL Fest: live music fits the brand.";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("campaign-genie").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write `genie.toml` into the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("genie.toml", content)
    }

    /// Write a secrets file holding credentials for every service.
    pub fn write_secrets(&self) -> PathBuf {
        self.write_file(
            "secrets.toml",
            r#"
[openai]
api_key = "sk-test"

[predict_hq]
token = "phq-test"

[segmind]
api_key = "sg-test"
"#,
        )
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Mock chat, events and image APIs on one local server.
#[allow(dead_code)]
pub struct MockServices {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

#[allow(dead_code)]
impl MockServices {
    /// Serve the happy path for a brief about Nescafe in Austin.
    pub fn happy_path() -> Self {
        let mut server = Server::new();
        let mut mocks = Vec::new();

        // Request bodies are disjoint: only the campaign request ends with the intent.
        mocks.push(
            server
                .mock("POST", "/v1/chat/completions")
                .match_header("authorization", "Bearer sk-test")
                .match_body(Matcher::Regex(r#"in Austin\?"\}\],"temperature""#.into()))
                .with_status(200)
                .with_body(chat_body(CAMPAIGN_REPLY))
                .expect(1)
                .create(),
        );
        mocks.push(
            server
                .mock("POST", "/v1/chat/completions")
                .match_body(Matcher::Regex("Instagram".into()))
                .with_status(200)
                .with_body(chat_body(POSTS_REPLY))
                .expect(1)
                .create(),
        );
        mocks.push(
            server
                .mock("POST", "/v1/chat/completions")
                .match_body(Matcher::Regex("List of events".into()))
                .with_status(200)
                .with_body(chat_body(RECOMMENDATION_REPLY))
                .expect(1)
                .create(),
        );
        mocks.push(
            server
                .mock("GET", "/v1/events/")
                .match_header("authorization", "Bearer phq-test")
                .match_query(Matcher::UrlEncoded("q".into(), "Austin".into()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    r#"{"count": 3, "results": [
                        {"title": "Food Truck Rally", "category": "community",
                         "description": "Tacos", "phq_attendance": 1200, "end": "2026-10-25"},
                        {"title": "ACL Fest", "category": "festivals",
                         "description": "Music", "phq_attendance": 75000,
                         "end": "2026-10-12T22:00:00Z"},
                        {"title": "ACL Fest", "category": "festivals",
                         "description": "Weekend two", "phq_attendance": 70000, "end": "2026-10-19"}
                    ]}"#,
                )
                .expect(1)
                .create(),
        );
        mocks.push(
            server
                .mock("POST", "/v1/sdxl")
                .match_header("x-api-key", "sg-test")
                .with_status(200)
                .with_header("content-type", "image/png")
                .with_body([0x89, b'P', b'N', b'G'])
                .expect(2)
                .create(),
        );

        Self { server, mocks }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// `genie.toml` body pointing every client at this server.
    pub fn config(&self, secrets_file: &Path) -> String {
        let url = self.url();
        format!(
            r#"
[secrets]
provider = "file"
file = "{secrets}"

[chat]
api_url = "{url}/v1/chat/completions"

[events]
api_url = "{url}/v1/events/"

[images]
api_url = "{url}/v1/sdxl"
"#,
            secrets = secrets_file.display().to_string().replace('\\', "/"),
        )
    }

    pub fn assert_all(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

pub fn chat_body(content: &str) -> String {
    serde_json::json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
        .to_string()
}
