//! Bootstrap for a local FinanceAnalyst Pro web app install.
//!
//! Shells out to git, node and npm: checks the prerequisites, clones or
//! updates the app repository, installs dependencies, seeds `.env`, then
//! optionally tests, builds and starts the dev server.

use clap::Parser;
use console::style;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::process::Command;

const PROJECT_NAME: &str = "financeanalyst_pro";
const REPO_URL: &str = "https://github.com/Bwillia13x/financeanalyst_pro.git";
const NODE_MIN_VERSION: u32 = 18;
const PORT: u16 = 4028;

const PROVIDER_KEYS: [&str; 4] = [
    "VITE_ALPHA_VANTAGE_API_KEY",
    "VITE_FMP_API_KEY",
    "VITE_QUANDL_API_KEY",
    "VITE_FRED_API_KEY",
];

/// Sets up a local FinanceAnalyst Pro development install
#[derive(Parser, Debug)]
#[command(name = "fap-setup", version, about)]
struct Args {
    /// Skip running the web app test suite
    #[arg(long)]
    skip_tests: bool,

    /// Skip building the production bundle
    #[arg(long)]
    skip_build: bool,

    /// Start the development server without asking
    #[arg(long)]
    auto_start: bool,

    /// Answer yes to every prompt
    #[arg(long, short = 'y')]
    yes: bool,
}

fn print_status(message: &str) {
    println!("{} {message}", style("[INFO]").blue());
}

fn print_success(message: &str) {
    println!("{} {message}", style("[SUCCESS]").green());
}

fn print_warning(message: &str) {
    println!("{} {message}", style("[WARNING]").yellow());
}

fn print_error(message: &str) {
    println!("{} {message}", style("[ERROR]").red());
}

fn print_header(message: &str) {
    let rule = "=".repeat(40);
    println!("\n{}", style(&rule).blue());
    println!("{}", style(message).blue());
    println!("{}\n", style(&rule).blue());
}

/// Runs a command in `cwd`, streaming its output through
async fn run(command: &str, args: &[&str], cwd: &Path) -> bool {
    let status = Command::new(command)
        .args(args)
        .current_dir(cwd)
        .kill_on_drop(true)
        .status()
        .await;
    match status {
        Ok(status) => status.success(),
        Err(err) => {
            print_error(&format!("Failed to run {command}: {err}"));
            false
        }
    }
}

/// Runs a command and captures its stdout, `None` on any failure
async fn run_capture(command: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(command)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Asks a yes/no question on stdin
///
/// An empty answer takes the default; otherwise only the non-default
/// letter flips it, matching the `(Y/n)` / `(y/N)` hint.
async fn confirm(question: &str, default_yes: bool) -> bool {
    let hint = if default_yes { "(Y/n)" } else { "(y/N)" };
    print!("{question} {hint}: ");
    let _ = std::io::stdout().flush();
    let line = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).map(|_| line)
    })
    .await;
    match line {
        Ok(Ok(line)) => {
            let answer = line.trim().to_lowercase();
            if answer.is_empty() {
                default_yes
            } else if default_yes {
                answer != "n"
            } else {
                answer == "y"
            }
        }
        _ => default_yes,
    }
}

fn node_major(version: &str) -> u32 {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()
        .and_then(|major| major.parse().ok())
        .unwrap_or(0)
}

async fn check_requirements() -> bool {
    print_header("CHECKING SYSTEM REQUIREMENTS");

    print_success(&format!(
        "Operating System: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    ));

    match run_capture("git", &["--version"]).await {
        Some(version) => print_success(&format!("Git: {version}")),
        None => {
            print_error("Git is not installed. Please install Git first.");
            return false;
        }
    }

    match run_capture("node", &["-v"]).await {
        Some(version) => {
            let major = node_major(&version);
            if major >= NODE_MIN_VERSION {
                print_success(&format!("Node.js: {version}"));
            } else {
                print_error(&format!(
                    "Node.js {NODE_MIN_VERSION}+ required. Current version: {major}"
                ));
                print_status("Please install Node.js from: https://nodejs.org/");
                return false;
            }
        }
        None => {
            print_error("Node.js is not installed. Please install Node.js from: https://nodejs.org/");
            return false;
        }
    }

    match run_capture("npm", &["-v"]).await {
        Some(version) => print_success(&format!("npm: {version}")),
        None => {
            print_error("npm is not available. Please check Node.js installation.");
            return false;
        }
    }

    true
}

async fn clone_repository(args: &Args) -> Option<PathBuf> {
    print_header("CLONING REPOSITORY");

    let project_dir = PathBuf::from(PROJECT_NAME);
    if project_dir.exists() {
        print_warning(&format!("Directory {PROJECT_NAME} already exists."));
        // Removal stays opt-in: non-interactive runs keep the checkout
        let remove = if args.yes || args.auto_start {
            false
        } else {
            confirm("Do you want to remove it and clone fresh?", false).await
        };
        if remove {
            if let Err(err) = std::fs::remove_dir_all(&project_dir) {
                print_error(&format!("Failed to remove {PROJECT_NAME}: {err}"));
                return None;
            }
        } else {
            print_status("Using existing directory...");
            if !run("git", &["pull", "origin", "main"], &project_dir).await {
                print_warning("git pull failed, continuing with the existing checkout");
            }
            return Some(project_dir);
        }
    }

    print_status(&format!("Cloning repository from {REPO_URL}..."));
    if run("git", &["clone", REPO_URL, PROJECT_NAME], Path::new(".")).await {
        print_success("Repository cloned successfully");
        Some(project_dir)
    } else {
        None
    }
}

async fn install_dependencies(project_dir: &Path) -> bool {
    print_header("INSTALLING DEPENDENCIES");

    print_status("Installing npm dependencies...");
    if run("npm", &["install"], project_dir).await {
        print_success("Dependencies installed successfully");
        true
    } else {
        print_error("Failed to install dependencies");
        false
    }
}

fn setup_environment(project_dir: &Path) -> bool {
    print_header("SETTING UP ENVIRONMENT");

    let env_file = project_dir.join(".env");
    if env_file.exists() {
        print_success(".env file already exists");
        return true;
    }

    print_status("Creating .env file from template...");
    if let Err(err) = std::fs::copy(project_dir.join(".env.example"), &env_file) {
        print_error(&format!("Failed to create .env: {err}"));
        return false;
    }
    print_success(".env file created");

    print_status("Environment file created with demo configuration.");
    print_status("The application will run in demo mode with mock data.");
    print_warning("To use live data, edit .env and add your API keys:");
    for key in PROVIDER_KEYS {
        println!("  - {key}");
    }
    true
}

async fn run_tests(project_dir: &Path) {
    print_header("RUNNING TESTS");

    print_status("Running test suite...");
    if run("npm", &["test", "--", "--run"], project_dir).await {
        print_success("All tests passed");
    } else {
        print_warning("Some tests failed, but this won't prevent the application from running");
    }
}

async fn build_application(project_dir: &Path) -> bool {
    print_header("BUILDING APPLICATION");

    print_status("Building production bundle...");
    if run("npm", &["run", "build"], project_dir).await {
        print_success("Application built successfully");
        true
    } else {
        print_error("Build failed. Please check the error messages above.");
        false
    }
}

async fn start_development(project_dir: &Path) {
    print_header("STARTING DEVELOPMENT SERVER");

    print_status(&format!("Starting development server on port {PORT}..."));
    print_status(&format!(
        "The application will be available at: http://localhost:{PORT}"
    ));
    print_status("Press Ctrl+C to stop the server");

    run("npm", &["start"], project_dir).await;
}

fn show_final_instructions() {
    print_header("SETUP COMPLETE!");

    println!("{}\n", style("✓ FinanceAnalyst Pro is ready to use!").green());

    println!("{}", style("Quick Start Guide:").blue());
    println!("1. The application is running at: http://localhost:{PORT}");
    println!("2. Currently in DEMO MODE with realistic mock data");
    println!("3. All financial calculations and analysis tools are functional");
    println!();

    println!("{}", style("Available Commands:").blue());
    println!("  npm start         - Start development server");
    println!("  npm test          - Run tests");
    println!("  npm run build     - Build for production");
    println!("  npm run test:ui   - Run tests with UI");
    println!();

    println!("{}", style("Next Steps:").blue());
    println!("1. Open http://localhost:{PORT} in your browser");
    println!("2. Try the terminal interface with commands like:");
    println!("   - help           (show all commands)");
    println!("   - status         (check system status)");
    println!("   - DCF(AAPL)      (run DCF analysis)");
    println!("   - validate       (check API keys)");
    println!();

    println!("{}", style("For Live Data:").blue());
    println!("1. Edit .env file and add your API keys");
    println!("2. Restart the development server");
    println!("3. Run 'validate' command to verify API keys");
    println!();

    println!("{}", style("Documentation:").blue());
    println!("- README.md for detailed setup instructions");
    println!("- GitHub: {REPO_URL}");
}

async fn run_setup(args: Args) -> i32 {
    print_header("FINANCEANALYST PRO - REMOTE AGENT SETUP");

    println!("This script will set up FinanceAnalyst Pro on your system.");
    println!("It will install dependencies, configure the environment, and start the application.");
    println!();

    if !args.yes
        && !args.auto_start
        && !confirm("Do you want to continue?", true).await
    {
        print_status("Setup cancelled by user");
        return 0;
    }

    if !check_requirements().await {
        return 1;
    }

    let Some(project_dir) = clone_repository(&args).await else {
        return 1;
    };

    if !install_dependencies(&project_dir).await {
        return 1;
    }

    if !setup_environment(&project_dir) {
        return 1;
    }

    if !args.skip_tests
        && (args.yes || args.auto_start || confirm("Do you want to run tests?", true).await)
    {
        // Test failures warn but never block the install
        run_tests(&project_dir).await;
    }

    if !args.skip_build
        && (args.yes
            || args.auto_start
            || confirm("Do you want to build the application?", true).await)
        && !build_application(&project_dir).await
    {
        return 1;
    }

    show_final_instructions();

    if args.auto_start
        || args.yes
        || confirm("Do you want to start the development server now?", true).await
    {
        start_development(&project_dir).await;
    } else {
        print_status("Setup complete! Run 'npm start' to start the development server.");
    }

    0
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let code = tokio::select! {
        code = run_setup(args) => code,
        _ = tokio::signal::ctrl_c() => {
            println!();
            print_status("Setup interrupted by user");
            0
        }
    };

    std::process::exit(code);
}
