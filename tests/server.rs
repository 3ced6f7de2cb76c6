use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use todo_hal::{Config, Store};

async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

/// Status line and headers, lowercased and sorted, without the `date` header.
fn header_lines(response: &str) -> Vec<String> {
    let head = response.split("\r\n\r\n").next().unwrap_or_default();
    let mut lines: Vec<String> = head
        .lines()
        .map(str::to_ascii_lowercase)
        .filter(|line| !line.starts_with("date:"))
        .collect();
    lines.sort();
    lines
}

#[tokio::test]
async fn serves_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let store = Store::new();
    let app = todo_hal::app(&Config::default(), store.clone());

    let (tx, rx) = oneshot::channel::<()>();
    let server = tokio::spawn(todo_hal::run(listener, app, async {
        let _ = rx.await;
    }));

    let body = r#"{"title":"over the wire","checked":true}"#;
    let created = raw_request(
        addr,
        &format!(
            "POST /todos HTTP/1.1\r\nHost: localhost:3000\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await;
    assert!(created.starts_with("HTTP/1.1 200 OK"));
    assert!(created.contains("content-type: application/hal+json; charset=utf-8"));
    assert!(created.contains(r#""href":"http://localhost:3000/todos/0""#));
    assert_eq!(store.len().await, 1);

    let get = raw_request(addr, "GET / HTTP/1.1\r\nHost: localhost:3000\r\nConnection: close\r\n\r\n").await;
    let head = raw_request(addr, "HEAD / HTTP/1.1\r\nHost: localhost:3000\r\nConnection: close\r\n\r\n").await;
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(head.ends_with("\r\n\r\n"));
    assert!(header_lines(&get).iter().any(|line| line.starts_with("content-length: ")));
    assert_eq!(header_lines(&get), header_lines(&head));

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
