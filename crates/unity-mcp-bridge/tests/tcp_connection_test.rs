//! Integration tests for the TCP editor connection against a local fake editor.

use std::time::Duration;

use serde_json::{json, Map, Value};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use unity_mcp_bridge::framing::read_json;
use unity_mcp_bridge::{EditorConnection, TcpEditorConnection};
use unity_mcp_core::{CommandRequest, Error, UnitySettings};

fn settings_for(port: u16) -> UnitySettings {
    UnitySettings {
        host: "127.0.0.1".to_string(),
        port,
        timeout_ms: 2000,
        ..UnitySettings::default()
    }
}

/// Accept one connection, capture its request and answer with `reply` split
/// into two writes.
async fn serve_once(listener: TcpListener, reply: Value) -> CommandRequest {
    let (mut socket, _) = listener.accept().await.unwrap();
    let request: CommandRequest = read_json(&mut socket, 1024 * 1024).await.unwrap();

    let bytes = serde_json::to_vec(&reply).unwrap();
    let (head, tail) = bytes.split_at(bytes.len() / 2);
    socket.write_all(head).await.unwrap();
    socket.flush().await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    socket.write_all(tail).await.unwrap();
    socket.flush().await.unwrap();

    request
}

#[tokio::test]
async fn test_send_command_success() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let editor = tokio::spawn(serve_once(
        listener,
        json!({
            "status": "success",
            "result": {"success": true, "message": "Created UI Button: Play", "buttonPath": "Canvas/Play"}
        }),
    ));

    let conn = TcpEditorConnection::new(settings_for(port));
    let mut params = Map::new();
    params.insert("name".to_string(), json!("Play"));
    params.insert("position".to_string(), json!([1.0, 2.0, 3.0]));

    let result = conn.send_command("CREATE_UI_BUTTON", params).await.unwrap();
    assert_eq!(result["message"], "Created UI Button: Play");
    assert_eq!(result["buttonPath"], "Canvas/Play");

    let request = editor.await.unwrap();
    assert_eq!(request.command, "CREATE_UI_BUTTON");
    assert_eq!(request.params["name"], "Play");
    assert_eq!(request.params["position"], json!([1.0, 2.0, 3.0]));
}

#[tokio::test]
async fn test_editor_error_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let editor = tokio::spawn(serve_once(
        listener,
        json!({"status": "error", "error": "Unknown command type: CREATE_UI_TEXT"}),
    ));

    let conn = TcpEditorConnection::new(settings_for(port));
    let err = conn
        .send_command("CREATE_UI_TEXT", Map::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Editor(_)));
    assert_eq!(err.to_string(), "Unknown command type: CREATE_UI_TEXT");
    editor.await.unwrap();
}

#[tokio::test]
async fn test_ping() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let editor = tokio::spawn(serve_once(
        listener,
        json!({"status": "success", "result": {"message": "pong"}}),
    ));

    let conn = TcpEditorConnection::new(settings_for(port));
    conn.ping().await.unwrap();

    let request = editor.await.unwrap();
    assert_eq!(request.command, "ping");
    assert!(request.params.is_empty());
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let conn = TcpEditorConnection::new(settings_for(port));
    let err = conn.send_command("ping", Map::new()).await.unwrap_err();

    assert!(matches!(err, Error::Connection(_)));
    assert!(err.to_string().contains("could not connect to Unity"));
}

#[tokio::test]
async fn test_unresponsive_editor_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let editor = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        drop(socket);
    });

    let conn = TcpEditorConnection::new(UnitySettings {
        timeout_ms: 100,
        ..settings_for(port)
    });
    let err = conn.send_command("ping", Map::new()).await.unwrap_err();

    assert!(matches!(err, Error::Timeout(100)));
    editor.abort();
}

#[tokio::test]
async fn test_each_command_opens_a_fresh_socket() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let editor = tokio::spawn(async move {
        let mut commands = Vec::new();
        for _ in 0..2 {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request: CommandRequest = read_json(&mut socket, 1024).await.unwrap();
            commands.push(request.command);
            let reply = serde_json::to_vec(&json!({"status": "success", "result": {}})).unwrap();
            socket.write_all(&reply).await.unwrap();
        }
        commands
    });

    let conn = TcpEditorConnection::new(settings_for(port));
    conn.send_command("CREATE_UI_BUTTON", Map::new()).await.unwrap();
    conn.send_command("CREATE_UI_TEXT", Map::new()).await.unwrap();

    assert_eq!(
        editor.await.unwrap(),
        vec!["CREATE_UI_BUTTON".to_string(), "CREATE_UI_TEXT".to_string()]
    );
}
