use clap::Parser;
use sdwm_core::Manager;
use std::process::exit;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

#[derive(Debug, Parser)]
#[command(about, disable_version_flag = true, disable_help_flag = true)]
struct SdwmCli {
    /// Print the version and exit
    #[arg(short = 'v')]
    version: bool,
}

fn main() {
    let cli = SdwmCli::parse();
    if cli.version {
        println!("sdwm-{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    sdwm::utils::log::setup_logging();
    tracing::info!("sdwm booting...");

    let config = sdwm::load();
    let manager = match Manager::<XlibWindowHandle, sdwm::Config, XlibDisplayServer>::new(config) {
        Ok(manager) => manager,
        Err(err) => {
            eprintln!("sdwm: {err}");
            exit(1);
        }
    };
    manager.event_loop();
    tracing::info!("Completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_flag_is_parsed() {
        let cli = SdwmCli::try_parse_from(["sdwm", "-v"]).unwrap();
        assert!(cli.version);
    }

    #[test]
    fn no_arguments_runs_the_manager() {
        let cli = SdwmCli::try_parse_from(["sdwm"]).unwrap();
        assert!(!cli.version);
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(SdwmCli::try_parse_from(["sdwm", "--restart"]).is_err());
        assert!(SdwmCli::try_parse_from(["sdwm", "extra"]).is_err());
        assert!(SdwmCli::try_parse_from(["sdwm", "-h"]).is_err());
        assert!(SdwmCli::try_parse_from(["sdwm", "--help"]).is_err());
    }
}
