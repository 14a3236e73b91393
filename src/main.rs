//! tedit binary: a crossterm host around the editing library

mod runtime;
mod view;

use anyhow::Result;
use clap::Parser;

use tedit::cli::CliArgs;
use tedit::config::EditorConfig;
use tedit::model::AppModel;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    // The terminal belongs to the editor, so logs only go to the file
    tedit::tracing::init(false);

    let mut config = EditorConfig::load();
    if startup.overwrite {
        config.insert_mode = false;
    }

    let (cols, rows) = crossterm::terminal::size()?;
    let mut model = AppModel::new(config, cols, rows);
    if let Some(path) = startup.file_path() {
        model.open_startup_file(path, startup.initial_row);
    }
    tracing::info!(cols, rows, "starting editor");

    let mut app = App::new(model);
    app.run()
}
