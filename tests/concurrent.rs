use futures::stream::{FuturesUnordered, StreamExt};
use lettre::transport::stub::AsyncStubTransport;
use mailbridge::drivers::SmtpMailer;
use mailbridge::{Config, Mailer, Transmission};

#[tokio::test]
async fn concurrent_sends_complete_independently() {
    let cfg = Config {
        url: "smtp.example.com".into(),
        port: 587,
        from_address: "from@test.com".into(),
        from_name: "Sender".into(),
        password: "secret".into(),
        ..Default::default()
    };
    let mailer = SmtpMailer::with_transport(cfg, AsyncStubTransport::new_ok()).unwrap();

    let t = Transmission::new()
        .recipient("recipient@test.com")
        .subject("Subject")
        .html("<h1>HTML</h1>");

    let mut futs = FuturesUnordered::new();
    for _ in 0..5 {
        futs.push(mailer.send(&t));
    }

    while let Some(res) = futs.next().await {
        let response = res.expect("send failed");
        assert_eq!(response.status_code, 200);
    }
}
