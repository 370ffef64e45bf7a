mod common;

use common::{test_data, TestContext};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};
use tonic::Code;
use user_service::grpc::pb::{
    user_service_client::UserServiceClient, DeleteUserRequest, Empty, GetUserRequest,
};
use user_service::grpc::users;
use user_service::utils::token::LOGIN_TOKEN;

struct RunningServer {
    client: UserServiceClient<Channel>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _ctx: TestContext,
}

impl RunningServer {
    async fn start() -> RunningServer {
        let ctx = TestContext::new().await;

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let endpoint = format!("http://{}", listener.local_addr().expect("Failed to get local addr"));
        let incoming = TcpListenerStream::new(listener);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let service = users::server(ctx.db.clone());
        tokio::spawn(async move {
            Server::builder()
                .add_service(service)
                .serve_with_incoming_shutdown(incoming, async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("gRPC server failed");
        });

        let client = UserServiceClient::connect(endpoint)
            .await
            .expect("Failed to connect client");

        RunningServer { client, shutdown_tx: Some(shutdown_tx), _ctx: ctx }
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_full_user_lifecycle_over_grpc() {
    println!("\n\n[+] Running test: test_full_user_lifecycle_over_grpc");
    let mut server = RunningServer::start().await;
    let client = &mut server.client;

    println!("[>] Creating user a@x.com");
    let created = client
        .create_user(test_data::create_request("A", "a@x.com", "p1", "user"))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();
    assert!(!created.id.is_empty());

    println!("[>] Fetching user {}", created.id);
    let fetched = client
        .get_user(GetUserRequest { id: created.id.clone() })
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();
    assert_eq!(fetched, created);

    println!("[>] Promoting user to admin with a new secret");
    let updated = client
        .update_user(test_data::update_request(&created.id, "A", "a@x.com", "p2", "admin"))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();
    assert_eq!(updated.role, "admin");

    println!("[>] Logging in with the new and the old secret");
    let token = client
        .login(test_data::login_request("a@x.com", "p2"))
        .await
        .unwrap()
        .into_inner()
        .token;
    assert_eq!(token, LOGIN_TOKEN);

    let status = client
        .login(test_data::login_request("a@x.com", "p1"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);

    println!("[>] Deleting user");
    client
        .delete_user(DeleteUserRequest { id: created.id.clone() })
        .await
        .unwrap();

    let status = client
        .get_user(GetUserRequest { id: created.id })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let users = client.list_users(Empty {}).await.unwrap().into_inner().users;
    assert!(users.is_empty());
    println!("[/] Test passed: full lifecycle over gRPC.");
}

#[tokio::test]
async fn test_error_statuses_cross_the_wire() {
    let mut server = RunningServer::start().await;
    let client = &mut server.client;

    client
        .create_user(test_data::create_request("B", "b@x.com", "p", "user"))
        .await
        .unwrap();

    let status = client
        .create_user(test_data::create_request("B2", "b@x.com", "p", "user"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::AlreadyExists);
    assert_eq!(status.message(), "user with this email already exists");

    let status = client
        .delete_user(DeleteUserRequest { id: "несуществующий-id".to_string() })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "user not found");
}
