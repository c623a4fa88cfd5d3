use borderless_core::MonitorArea;
use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Arguments for the `debug monitor` subcommand.
#[derive(Args)]
pub struct MonitorArgs {
    /// Window handle (decimal or hex with 0x prefix)
    #[arg(long)]
    hwnd: String,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &MonitorArgs) {
    let hwnd = match parse_hwnd(&args.hwnd) {
        Ok(hwnd) => hwnd,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let Some((area, screen)) = resolve(hwnd) else {
        eprintln!("Error: no monitor found for window 0x{hwnd:X}.");
        std::process::exit(1);
    };

    if args.json {
        let report = serde_json::json!({
            "hwnd": hwnd,
            "monitor": area,
            "virtual_screen": screen,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: could not serialize report: {e}"),
        }
        return;
    }

    println!("{}", table(&area));
    println!(
        "Offset: ({}, {})  Taskbar: {}x{}  Virtual screen: {}x{}",
        area.offset.x,
        area.offset.y,
        area.taskbar_width(),
        area.taskbar_height(),
        screen.width,
        screen.height
    );
}

#[cfg(windows)]
fn resolve(hwnd: usize) -> Option<(MonitorArea, borderless_core::Size)> {
    use borderless_core::MonitorResolver;

    let monitors = borderless_windows::Win32Monitors;
    let area = monitors.nearest(hwnd)?;
    Some((area, monitors.virtual_screen()))
}

#[cfg(not(windows))]
fn resolve(_hwnd: usize) -> Option<(MonitorArea, borderless_core::Size)> {
    eprintln!("Error: monitor queries are only available on Windows.");
    std::process::exit(1);
}

fn table(area: &MonitorArea) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Region"),
            Cell::new("Left").set_alignment(CellAlignment::Right),
            Cell::new("Top").set_alignment(CellAlignment::Right),
            Cell::new("Right").set_alignment(CellAlignment::Right),
            Cell::new("Bottom").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for (name, region) in [("Display", area.display), ("Work", area.work)] {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(region.left).set_alignment(CellAlignment::Right),
            Cell::new(region.top).set_alignment(CellAlignment::Right),
            Cell::new(region.right).set_alignment(CellAlignment::Right),
            Cell::new(region.bottom).set_alignment(CellAlignment::Right),
            Cell::new(region.width).set_alignment(CellAlignment::Right),
            Cell::new(region.height).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Parses a window handle from a string (supports decimal and 0x hex).
fn parse_hwnd(s: &str) -> Result<usize, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16).map_err(|e| format!("invalid hex hwnd '{s}': {e}"))
    } else {
        s.parse()
            .map_err(|e| format!("invalid decimal hwnd '{s}': {e}"))
    }
}
