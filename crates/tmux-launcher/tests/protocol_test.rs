//! End-to-end tests for the host protocol.

use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::{json, Value};
use tmux_launcher::{serve, TmuxExtension};
use tmux_launcher_core::{Error, LauncherConfig, Result};
use tmux_launcher_sessions::TmuxRunner;

/// tmux stand-in with fixed list-panes output per server.
struct FakeTmux {
    servers: HashMap<Option<&'static str>, &'static str>,
}

impl TmuxRunner for FakeTmux {
    fn list_panes(&self, socket: Option<&str>) -> Result<String> {
        self.servers
            .iter()
            .find(|(name, _)| name.as_deref() == socket)
            .map(|(_, output)| output.to_string())
            .ok_or_else(|| Error::TmuxFailed {
                status: "exit status: 1".to_string(),
                stderr: "no server running".to_string(),
            })
    }
}

fn run(runner: FakeTmux, input: &[Value]) -> Vec<Value> {
    let mut extension = TmuxExtension::from_config(runner, &LauncherConfig::default());
    let input: String = input.iter().map(|event| format!("{event}\n")).collect();

    let mut output = Vec::new();
    serve(&mut extension, input.as_bytes(), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn commands(response: &Value) -> Vec<&str> {
    response["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["on_enter"]["command"].as_str().unwrap())
        .collect()
}

#[test]
fn test_query_lists_focused_panes() {
    let tmux = FakeTmux {
        servers: HashMap::from([(
            None,
            "11:1:main:vim\n01:1:main:shell\n10:1:main:logs\n11:0:work:bash\n",
        )]),
    };

    let responses = run(tmux, &[json!({"event": "query"})]);

    assert_eq!(responses.len(), 1);
    assert_eq!(
        responses[0],
        json!({
            "action": "render_result_list",
            "items": [
                {
                    "icon": "images/icon.png",
                    "name": "vim",
                    "description": "Session main",
                    "on_enter": {"type": "run_script", "command": "xterm -e tmux attach-session -t main"}
                },
                {
                    "icon": "images/icon.png",
                    "name": "(Detached) bash",
                    "description": "Session work",
                    "on_enter": {"type": "run_script", "command": "xterm -e tmux attach-session -t work"}
                }
            ]
        })
    );
}

#[test]
fn test_socket_sessions_after_preferences() {
    let tmux = FakeTmux {
        servers: HashMap::from([(None, ""), (Some("dev"), "11:1:api:cargo run\n")]),
    };

    let responses = run(
        tmux,
        &[
            json!({"event": "preferences", "preferences": {
                "kw": "tm",
                "tmux_attach_cmd": "alacritty -e tmux",
                "tmux_sockets": "dev"
            }}),
            json!({"event": "query", "argument": null}),
            json!({"event": "query", "argument": "CARGO"}),
            json!({"event": "query", "argument": "nomatch"}),
        ],
    );

    assert_eq!(responses.len(), 3);
    assert_eq!(
        commands(&responses[0]),
        ["alacritty -e tmux -L dev attach-session -t api"]
    );
    assert_eq!(commands(&responses[1]), commands(&responses[0]));
    assert!(commands(&responses[2]).is_empty());
}

#[test]
fn test_preferences_update_changes_command() {
    let tmux = FakeTmux {
        servers: HashMap::from([(None, "11:1:main:vim\n")]),
    };

    let responses = run(
        tmux,
        &[
            json!({"event": "query"}),
            json!({"event": "preferences_update", "id": "tmux_attach_cmd",
                   "new_value": "wezterm start -- tmux", "old_value": "xterm -e tmux"}),
            json!({"event": "query", "argument": "vim"}),
        ],
    );

    assert_eq!(commands(&responses[0]), ["xterm -e tmux attach-session -t main"]);
    assert_eq!(
        commands(&responses[1]),
        ["wezterm start -- tmux attach-session -t main"]
    );
}

#[test]
fn test_binary_without_tmux_renders_empty_list() {
    let dir = std::env::temp_dir().join(format!("tmux-launcher-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("config.yaml");
    std::fs::write(
        &config_path,
        "tmux:\n  binary: tmux-launcher-test-no-such-binary\nlogging:\n  level: error\n",
    )
    .unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_tmux-launcher"))
        .arg("--config")
        .arg(&config_path)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"{\"event\":\"query\",\"argument\":\"vim\"}\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"action\":\"render_result_list\",\"items\":[]}\n"
    );
}
