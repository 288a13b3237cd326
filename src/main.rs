use anyhow::Result;
use cliexpect::{ExpectError, Reply, Session};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream};
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("cliexpect - Scripted CLI Dialog Demo");
    println!("{}", "=".repeat(50));
    println!();

    let (device, driver) = tokio::io::duplex(256);
    tokio::spawn(mock_device(device));

    let (source, sink) = tokio::io::split(driver);
    let mut session = Session::new(source, sink);

    demo_login(&mut session).await?;
    println!();
    demo_timeout(&mut session).await?;

    println!("\n{}", "=".repeat(50));
    println!("Demo complete.");

    Ok(())
}

async fn demo_login<R, W>(session: &mut Session<R, W>) -> Result<()>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    println!("Demo 1: Login Dialog");
    println!("{}", "-".repeat(40));

    let reply = session.expect("login: ", Duration::from_secs(5)).await?;
    println!("device said: {:?}", reply.text());
    session.send_line("manager\r").await?;

    session.expect("Password: ", Duration::from_secs(1)).await?;
    session.send_line("friend\r").await?;

    let reply = session.expect("Manager > ", Duration::from_secs(1)).await?;
    println!("logged in, banner: {:?}", reply.text());

    session.send_line("help\r").await?;
    match session.expect("Manager > ", Duration::from_secs(1)).await? {
        Reply::Matched(text) => println!("help output: {text:?}"),
        Reply::StreamEnded(text) => println!("device hung up after: {text:?}"),
    }

    Ok(())
}

async fn demo_timeout<R, W>(session: &mut Session<R, W>) -> Result<()>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    println!("Demo 2: Wrong Prompt / Timeout");
    println!("{}", "-".repeat(40));

    // The device prompt is "Manager > "; waiting for anything else times out.
    match session.expect("Manager ? ", Duration::from_millis(300)).await {
        Err(ExpectError::PatternNotFound { pattern, timeout }) => {
            println!("as expected, no {pattern:?} within {timeout:?}");
        }
        other => println!("unexpected outcome: {other:?}"),
    }

    Ok(())
}

/// A scripted stand-in for a managed switch console: greets with a login
/// prompt (fragmented, to show boundary handling), authenticates anything,
/// and answers `help`.
async fn mock_device(stream: DuplexStream) -> std::io::Result<()> {
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();

    writer.write_all(b"Welcome to GS908M\r\nlogi").await?;
    writer.flush().await?;
    sleep(Duration::from_millis(30)).await;
    writer.write_all(b"n: ").await?;
    writer.flush().await?;

    reader.read_until(b'\r', &mut line).await?;
    writer.write_all(b"Password: ").await?;
    writer.flush().await?;

    line.clear();
    reader.read_until(b'\r', &mut line).await?;
    writer
        .write_all(b"\r\nGS908M command line interface\r\nManager > ")
        .await?;
    writer.flush().await?;

    line.clear();
    reader.read_until(b'\r', &mut line).await?;
    writer
        .write_all(b"\r\ncommands: show, set, save, exit\r\nManager > ")
        .await?;
    writer.flush().await?;

    // Stay connected so the timeout demo times out instead of seeing EOF.
    line.clear();
    reader.read_until(b'\r', &mut line).await?;
    Ok(())
}
