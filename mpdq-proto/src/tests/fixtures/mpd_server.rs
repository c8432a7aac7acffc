use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

pub const GREETING: &str = "OK MPD 0.23.5\n";

/// Single connection MPD stand-in. Sends `greeting`, reads the query until the
/// client half-closes, answers with `response` and hangs up. The handle
/// resolves to the query the client sent.
#[allow(clippy::unwrap_used)]
pub async fn spawn(greeting: &'static str, response: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(greeting.as_bytes()).await.unwrap();

        let mut query = String::new();
        socket.read_to_string(&mut query).await.unwrap();

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        query
    });

    (addr, handle)
}

/// Accepts the connection and never says anything.
#[allow(clippy::unwrap_used)]
pub async fn spawn_silent() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        std::future::pending::<()>().await;
    });

    (addr, handle)
}
