// src/main.rs
//
// Calculatrice d’aire — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native, ou session console (--console)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod console;
mod entrees;
mod noyau;

use app::AppAire;
use noyau::OptionsAire;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice d’aire";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[clap(name = "calculatrice_aire", version, about = "Aire d’un pavé droit : 2(ab + bc + ac)")]
struct Args {
    #[clap(long, help = "Session dans le terminal au lieu de la fenêtre")]
    console: bool,

    #[clap(long, help = "Replie les racines carrées parfaites des produits (r2·r2 = 2)")]
    replier_racines: bool,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let options = OptionsAire {
        replier_racines: args.replier_racines,
    };
    log::info!("démarrage ({options:?}, console={})", args.console);

    if args.console {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        if let Err(e) = console::session(&mut stdin.lock(), &mut stdout.lock(), &options) {
            log::error!("session console : {e}");
            println!("Erreur inattendue : {e}");
        }
        return Ok(());
    }

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        native,
        Box::new(move |_cc| Ok(Box::new(AppAire::new(options)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppAire, OptionsAire, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(AppAire::new(OptionsAire::default())))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
