use anyhow::Context as _;
use clap::Parser as _;
use rawframe_tools::{Args, DumpSink, FrameSender, Mode, check_capabilities};
use rawnic::{RawNic, Transmit, mac_by_name};
use std::{io, thread};

fn run<T: Transmit>(args: &Args, sender: &mut FrameSender, tx: &mut T) -> anyhow::Result<()> {
    for round in 0..args.count {
        if round > 0 {
            if let Some(delay) = args.delay {
                thread::sleep(delay);
            }
        }
        if matches!(args.mode, Mode::Udp | Mode::Both) {
            let len = sender
                .send_udp(tx, args.payload_len)
                .context("Failed to send UDP frame")?;
            log::info!(
                "Sent {len} byte UDP frame to {}:{} via {}",
                args.dst_ip,
                args.dst_port,
                args.interface
            );
        }
        if matches!(args.mode, Mode::Rdmx | Mode::Both) {
            let len = sender
                .send_rdmx(tx, args.payload_len, args.target_addr)
                .context("Failed to send RDMX frame")?;
            log::info!(
                "Sent {len} byte RDMX frame to {}:{} target {:#018x} via {}",
                args.dst_ip,
                args.rdmx_port,
                args.target_addr,
                args.interface
            );
        }
    }
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let addressing = args
        .addressing(mac_by_name)
        .with_context(|| format!("Failed to read MAC address of {}", args.interface))?;
    let mut sender = FrameSender::new(&addressing);

    if args.dry_run {
        let mut sink = DumpSink::new(io::stdout().lock());
        run(&args, &mut sender, &mut sink)?;
        log::info!("Dumped {} frames", sink.frames());
        return Ok(());
    }

    check_capabilities(&[caps::Capability::CAP_NET_RAW])?;

    let mut nic = RawNic::connect(&args.interface)
        .with_context(|| format!("Failed to open raw socket on {}", args.interface))?;

    run(&args, &mut sender, &mut nic)
}
