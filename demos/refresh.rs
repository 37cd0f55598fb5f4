use aliyunpan_auth::{Config, TokenClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt().try_init();

    let refresh_token = std::env::var("ALIYUNPAN_REFRESH_TOKEN")?;
    let client = TokenClient::new(Config::from_env()?)?;

    let token = client.exchange_access_token(&refresh_token).await?;
    println!("token type:  {}", token.access_token_type());
    println!("expires at:  {}", token.expire_time());
    println!("expired now: {}", token.is_expired());
    // The provider rotates refresh tokens; store this one for the next run.
    println!("next refresh token: {}", token.refresh_token());
    Ok(())
}
