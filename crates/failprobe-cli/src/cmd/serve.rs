use anyhow::Result;
use failprobe_core::ProbeConfig;

pub fn run(port: u16, no_open: bool, config: ProbeConfig) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("failprobe → http://localhost:{actual_port}");

        tokio::select! {
            res = failprobe_server::serve_on(config, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
