// Windows GUI应用程序配置，隐藏控制台窗口
#![cfg_attr(
    not(debug_assertions),
    windows_subsystem = "windows"
)]

mod cli;

use clap::Parser;
use cli::{Args, Commands, ServerCommands};
use factorio_quicklaunch::app::config::manager::ConfigManager;
use factorio_quicklaunch::app::config::paths::ConfigPaths;
use factorio_quicklaunch::app::error::types::{LauncherError, Result};
use factorio_quicklaunch::app::logging::setup::init_logging;
use factorio_quicklaunch::core::paths::PathGuesser;
use factorio_quicklaunch::core::services::{
    find_server, latest_save_summary, LauncherService,
};
use factorio_quicklaunch::{LauncherConfig, ServerForm};

fn main() {
    init_logging();

    // 解析命令行参数
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{}: {}", e.title(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config_paths = match args.config {
        Some(path) => ConfigPaths::with_file(path),
        None => ConfigPaths::new()?,
    };
    let service = LauncherService::system(ConfigManager::new(config_paths));

    // 没有子命令时启动 GUI
    let Some(command) = args.command else {
        return factorio_quicklaunch::ui::run_gui(service);
    };

    let mut config = service.bootstrap(&PathGuesser::from_user_home());

    match command {
        Commands::Launch => {
            service.launch_normal(&config)?;
            println!("Launched Factorio.");
        }
        Commands::Continue => {
            let command = service.continue_latest(&config)?;
            println!("Launching latest save: {}", command.redacted());
        }
        Commands::Connect { name } => {
            let index = server_index(&config, &name)?;
            service.connect_to_server(&config, index)?;
            println!("Connecting to {}…", config.servers[index].address());
        }
        Commands::LatestSave => {
            println!("{}", latest_save_summary(&config));
        }
        Commands::Settings {
            executable,
            saves_dir,
        } => {
            if executable.is_some() || saves_dir.is_some() {
                let executable =
                    executable.unwrap_or_else(|| config.executable_path.clone());
                let saves_dir =
                    saves_dir.unwrap_or_else(|| config.saves_directory.clone());
                service.update_settings(&mut config, &executable, &saves_dir)?;
                println!("Settings saved.");
            }
            println!("Factorio executable: {}", config.executable_path);
            println!("Saves directory:     {}", config.saves_directory);
        }
        Commands::Servers(ServerCommands::List) => {
            if config.servers.is_empty() {
                println!("No servers configured.");
            }
            for server in &config.servers {
                println!(
                    "{:<20} {:<30} {}",
                    server.name,
                    server.address(),
                    server.user
                );
            }
        }
        Commands::Servers(ServerCommands::Add(fields)) => {
            let form = ServerForm {
                name: fields.name,
                host: fields.host,
                port: fields.port,
                user: fields.user,
                password: fields.password,
            };
            service.add_server(&mut config, &form)?;
            println!("Server added.");
        }
        Commands::Servers(ServerCommands::Edit { target, fields }) => {
            let index = server_index(&config, &target)?;
            let current = &config.servers[index];
            let form = ServerForm {
                name: fields.name.unwrap_or_else(|| current.name.clone()),
                host: fields.host.unwrap_or_else(|| current.host.clone()),
                port: fields.port.unwrap_or(current.port),
                user: fields.user.unwrap_or_else(|| current.user.clone()),
                password: fields.password.unwrap_or_default(),
            };
            service.edit_server(&mut config, index, &form)?;
            println!("Server updated.");
        }
        Commands::Servers(ServerCommands::Remove { name }) => {
            let index = server_index(&config, &name)?;
            service.remove_server(&mut config, index)?;
            println!("Server removed.");
        }
    }

    Ok(())
}

fn server_index(config: &LauncherConfig, name: &str) -> Result<usize> {
    find_server(config, name).ok_or_else(|| {
        LauncherError::validation("Server", format!("No server named {name:?}"))
    })
}
