use borderless_core::border;
use borderless_core::chrome::is_snapped_size;
use borderless_core::{MonitorArea, Rect, Region, Size, config};
use clap::Args;

/// Arguments for the `debug borders` subcommand.
#[derive(Args)]
pub struct BordersArgs {
    /// Window left edge in pixels
    #[arg(long, allow_negative_numbers = true)]
    x: i32,
    /// Window top edge in pixels
    #[arg(long, allow_negative_numbers = true)]
    y: i32,
    /// Window width in pixels
    #[arg(long)]
    width: i32,
    /// Window height in pixels
    #[arg(long)]
    height: i32,
    /// Monitor display edges as left,top,right,bottom
    #[arg(long, value_parser = parse_edges, allow_hyphen_values = true, default_value = "0,0,1920,1080")]
    display: Region,
    /// Monitor work-area edges as left,top,right,bottom
    #[arg(long, value_parser = parse_edges, allow_hyphen_values = true, default_value = "0,0,1920,1040")]
    work: Region,
    /// Virtual screen width (defaults to the display width)
    #[arg(long)]
    screen_width: Option<i32>,
    /// Virtual screen height (defaults to the display height)
    #[arg(long)]
    screen_height: Option<i32>,
    /// Resize border width (defaults to the configured width)
    #[arg(long)]
    border: Option<i32>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &BordersArgs) {
    let border_width = args
        .border
        .unwrap_or_else(|| config::load().resize_border_width());
    let area = MonitorArea::new(args.display, args.work);
    let screen = Size::new(
        args.screen_width.unwrap_or(args.display.width),
        args.screen_height.unwrap_or(args.display.height),
    );
    let bounds = Rect::new(args.x, args.y, args.width, args.height);

    let thickness = border::compute(bounds, &area, screen, border_width);
    let snapped = is_snapped_size(bounds.width, bounds.height, &area, screen);

    if args.json {
        let report = serde_json::json!({
            "bounds": bounds,
            "monitor": area,
            "virtual_screen": screen,
            "borders": thickness,
            "snapped": snapped,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: could not serialize report: {e}"),
        }
        return;
    }

    println!(
        "Window:   ({}, {}) {}x{}",
        bounds.x, bounds.y, bounds.width, bounds.height
    );
    println!(
        "Work:     ({}, {}) {}x{}, offset ({}, {})",
        area.work.left,
        area.work.top,
        area.work.width,
        area.work.height,
        area.offset.x,
        area.offset.y
    );
    println!("Screen:   {}x{}", screen.width, screen.height);
    println!(
        "Borders:  left={} top={} right={} bottom={}",
        thickness.left, thickness.top, thickness.right, thickness.bottom
    );
    println!("Snapped:  {}", if snapped { "yes" } else { "no" });
}

/// Parses `left,top,right,bottom` into a region.
fn parse_edges(s: &str) -> Result<Region, String> {
    let edges = s
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid edge in '{s}': {e}"))?;

    match edges[..] {
        [left, top, right, bottom] => Ok(Region::from_edges(left, top, right, bottom)),
        _ => Err(format!("expected left,top,right,bottom, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_edges_accepts_four_values() {
        // Act
        let region = parse_edges("0, 0, 1920, 1040").unwrap();

        // Assert
        assert_eq!(region, Region::from_edges(0, 0, 1920, 1040));
    }

    #[test]
    fn parse_edges_accepts_negative_monitor_origin() {
        // Act
        let region = parse_edges("-1920,0,0,1080").unwrap();

        // Assert
        assert_eq!(region.left, -1920);
        assert_eq!(region.width, 1920);
    }

    #[test]
    fn parse_edges_rejects_wrong_count() {
        // Assert
        assert!(parse_edges("0,0,1920").is_err());
        assert!(parse_edges("0,0,a,1040").is_err());
    }
}
