use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{
    Error,
    WrapErr,
};
use ooktx::{
    bits::BitString,
    frame::FrameTimings,
    hamming,
    line::GpioLine,
    session::{
        Session,
        SessionConfig,
    },
};
use tokio::signal::unix::{
    SignalKind,
    signal,
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting ooktx-cli");
    let args = Args::parse();
    tracing::debug!(?args);

    let payload = BitString::from_byte(args.payload);
    tracing::info!(
        payload = args.payload,
        bits = %payload,
        code_word = %hamming::encode(&payload),
        "transmitting"
    );

    let line = GpioLine::open(args.pin)
        .wrap_err_with(|| format!("pin {} is not available", args.pin))?;

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            shutdown_signal().await;
            tracing::info!("shutdown requested");
            cancel.cancel();
        }
    });

    let config = SessionConfig {
        payload,
        timings: FrameTimings::from_payload_bit(Duration::from_millis(args.duration)),
        repeat: (args.repeat > 0).then(|| Duration::from_millis(args.repeat)),
    };

    let result = Session::new(line, config, cancel).run().await;

    if let Err(error) = &result {
        tracing::error!(?error);
    }
    else {
        tracing::info!("Program exiting");
    }

    Ok(result?)
}

/// Resolves when any of the shutdown signals arrives: SIGINT, SIGTERM,
/// SIGHUP or SIGQUIT. All of them mean the same thing here, stop pulsing
/// and leave the line low.
async fn shutdown_signal() {
    async fn wait_for(kind: SignalKind) {
        match signal(kind) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(?error, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    }

    tokio::select! {
        _ = wait_for(SignalKind::interrupt()) => {}
        _ = wait_for(SignalKind::terminate()) => {}
        _ = wait_for(SignalKind::hangup()) => {}
        _ = wait_for(SignalKind::quit()) => {}
    }
}

#[derive(Debug, Parser)]
struct Args {
    /// Output pin, BCM numbering.
    #[clap(long, default_value = "7")]
    pin: u8,

    /// Payload bit duration in milliseconds. Sync bits are held for twice
    /// this.
    #[clap(long, default_value = "50")]
    duration: u64,

    /// Byte to transmit.
    #[clap(long, default_value = "100")]
    payload: u8,

    /// Pause in milliseconds between the end of one transmission and the
    /// start of the next. 0 transmits the payload once.
    #[clap(long, default_value = "0")]
    repeat: u64,
}
