use gradient_fill::config::fill::load_config;
use gradient_fill::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use gradient_fill::{FillReport, GradientFill};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut gray = load_grayscale_image(&config.input_path)?;
    let fill = GradientFill::new(config.params.clone());
    let report = fill.process(&mut gray).map_err(|e| e.to_string())?;

    save_grayscale_u8(&gray, &config.output_path)?;
    print_text_summary(&report);
    println!("Saved filled image to {}", config.output_path.display());

    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: gradient_fill <config.json>".to_string()
}

fn print_text_summary(report: &FillReport) {
    println!("Fill summary");
    println!("  image: {}x{}", report.width, report.height);
    println!(
        "  mask: {} px at threshold >= {}",
        report.mask_pixels, report.white_threshold
    );
    let b = &report.bbox;
    println!(
        "  bbox: x=[{}, {}] y=[{}, {}]",
        b.min_x, b.max_x, b.min_y, b.max_y
    );
    let d = &report.domain;
    println!("  domain: left={} top={} side={}", d.left, d.top, d.side);
    println!(
        "  gradient: {} -> {} noise_level={} filled={} px",
        report.gray_min, report.gray_max, report.noise_level, report.pixels_filled
    );
    if let Some(notch) = &report.notch {
        println!(
            "  notch: r={:.2} r_inner={:.2} half_angle={:.2}deg carved={} px",
            notch.geometry.radius,
            notch.geometry.inner_radius,
            notch.geometry.half_angle_rad.to_degrees(),
            notch.pixels_carved
        );
    }
    let stages: Vec<String> = report
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "  timings (ms): {} total={:.3}",
        stages.join(" "),
        report.latency_ms
    );
}
