//! JustinGreeno.dev entry point
//!
//! On the web this installs the site scripts once the DOM is ready. The
//! native build ranks a query against the built-in index, which is handy for
//! tuning keywords.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use greeno_site::Settings;
    use greeno_site::platform;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Welcome to JustinGreeno.dev!");
        log::info!("Built with passion by Justin Greeno");

        let settings = Settings::load();
        let ready = platform::on_dom_ready(move || {
            if let Err(e) = platform::install(&settings) {
                log::error!("Site setup failed: {}", e);
            }
        });
        if let Err(e) = ready {
            log::error!("Could not wait for DOM: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

/// Rank a query against the built-in site index
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "greeno-site")]
#[command(about = "Rank a query against the JustinGreeno.dev search index")]
#[command(version)]
struct Args {
    /// Search query; multiple words are joined with spaces
    #[arg(required = true)]
    query: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Args {
    fn query(&self) -> String {
        self.query.join(" ")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use greeno_site::SiteIndex;

    env_logger::init();
    let args = Args::parse();
    let query = args.query();

    let index = match SiteIndex::builtin() {
        Ok(index) => index,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Searching {} pages for {:?}", index.len(), query);
    let results = index.search(&query);
    if results.is_empty() {
        println!("No results found");
        return;
    }
    for result in results {
        let page = result.page;
        println!("{:>3}  {:<26} {}", result.score, page.title, page.url);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
