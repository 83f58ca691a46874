use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use rvault_crypto::{IntegrityTagger, SecretKey};
use rvault_server::{RvaultServer, ServerConfig};
use rvault_store::{InMemoryReplicaStore, ReplicaSnapshot, ReplicaStore, VerifyReport};
use rvault_types::ReplicaId;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Keygen(args) => cmd_keygen(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(replicas) = args.replicas {
        config.replica_count = replicas;
    }
    if let Some(initial) = &args.initial {
        config.initial_content = initial.clone();
    }
    if let Some(var) = &args.secret_env {
        config.secret_env = var.clone();
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    // Refuse to start without a secret, before anything binds.
    let server = RvaultServer::from_env(config).context("server startup failed")?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_keygen(args: KeygenArgs) -> anyhow::Result<()> {
    let key = SecretKey::generate(args.bytes);
    println!("{}", key.to_hex());
    Ok(())
}

fn print_replicas(replicas: &[ReplicaSnapshot]) {
    for r in replicas {
        println!("  {} {}", format!("#{}", r.id).cyan(), r.content);
    }
}

fn print_report(report: &VerifyReport) {
    if report.valid {
        println!("  {} all replicas authentic", "✓".green().bold());
    } else {
        let ids: Vec<String> = report.offenders.iter().map(ReplicaId::to_string).collect();
        println!("  {} tampered: {}", "✗".red().bold(), ids.join(", ").red());
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let key = SecretKey::generate(32);
    let tagger = Arc::new(IntegrityTagger::new(&key)?);
    let store = InMemoryReplicaStore::new(args.replicas as usize, "Hello World", tagger)?;

    println!("{}", "Initial replicas".bold());
    print_replicas(&store.read_all());

    println!("{}", "Authenticated update".bold());
    print_replicas(&store.update_all("Saved Data")?);
    print_report(&store.verify());

    // The middle replica of the default three, or the only one.
    let target = ReplicaId::new(args.replicas.min(2));
    println!("{} {}", "Corrupting replica".bold(), format!("#{target}").yellow());
    store.corrupt(target, "Corrupted Data")?;
    print_replicas(&store.read_all());
    print_report(&store.verify());

    println!("{}", "Majority restore".bold());
    let outcome = store.restore()?;
    println!(
        "  restored {} ({} votes)",
        outcome.restored_value.green(),
        outcome.votes
    );
    print_replicas(&outcome.replicas);
    print_report(&store.verify());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            config: None,
            bind: Some("0.0.0.0:1234".parse().unwrap()),
            replicas: Some(7),
            initial: None,
            secret_env: Some("MY_SECRET".into()),
        };
        let config = server_config(&args).unwrap();
        assert_eq!(config.bind_addr.port(), 1234);
        assert_eq!(config.replica_count, 7);
        assert_eq!(config.initial_content, "Hello World");
        assert_eq!(config.secret_env, "MY_SECRET");
    }

    #[test]
    fn serve_without_secret_fails_before_binding() {
        let args = ServeArgs {
            config: None,
            bind: None,
            replicas: None,
            initial: None,
            secret_env: Some("RVAULT_CLI_TEST_UNSET_SECRET".into()),
        };
        let err = cmd_serve(args).unwrap_err();
        assert!(format!("{err:#}").contains("RVAULT_CLI_TEST_UNSET_SECRET"));
    }

    #[test]
    fn demo_runs() {
        cmd_demo(DemoArgs { replicas: 3 }).unwrap();
        cmd_demo(DemoArgs { replicas: 1 }).unwrap();
    }
}
