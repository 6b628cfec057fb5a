use console::Style;
use stereomatch_core::pipeline::config::{PipelineConfig, Task};
use stereomatch_core::search::MatchSet;
use stereomatch_core::stitch::Mosaic;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    ok: Style,
    failed: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            ok: Style::new().green(),
            failed: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Stereomatch Pipeline"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Left"),
        s.path.apply_to(config.left.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Right"),
        s.path.apply_to(config.right.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Task"),
        s.value.apply_to(&config.task)
    );

    match &config.task {
        Task::Match(m) => {
            if let Some(ref path) = m.rois_file {
                println!(
                    "  {:<14}{}",
                    s.label.apply_to("ROI file"),
                    s.path.apply_to(path.display())
                );
            }
            if let Some(ref path) = m.overlay {
                println!(
                    "  {:<14}{}",
                    s.label.apply_to("Overlay"),
                    s.path.apply_to(path.display())
                );
            }
        }
        Task::Stitch(st) => {
            println!(
                "  {:<14}{}",
                s.label.apply_to("Output"),
                s.path.apply_to(st.output.display())
            );
        }
    }
    println!();
}

pub fn print_match_table(matches: &MatchSet) {
    let s = Styles::new();

    if matches.is_empty() {
        println!("No ROIs given, nothing to match.");
        return;
    }

    println!(
        "\n{:>4}  {:<22}  {:<22}  {:>12}",
        "#", "ROI (left)", "Match (right)", "SSD"
    );
    println!("{}", "-".repeat(66));

    for (i, entry) in matches.iter().enumerate() {
        match &entry.outcome {
            Ok(m) => println!(
                "{:>4}  {:<22}  {:<22}  {:>12.6}",
                i + 1,
                entry.roi.to_string(),
                s.ok.apply_to(m.region.to_string()),
                m.score
            ),
            Err(e) => println!(
                "{:>4}  {:<22}  {}",
                i + 1,
                entry.roi.to_string(),
                s.failed.apply_to(format!("failed: {e}"))
            ),
        }
    }

    println!(
        "\n{} matched, {} failed",
        matches.matched().count(),
        matches.failed().count()
    );
}

pub fn print_stitch_summary(mosaic: &Mosaic) {
    let s = Styles::new();
    let d = &mosaic.displacement;

    println!(
        "  {:<14}{}",
        s.label.apply_to("Feature"),
        s.value.apply_to(d.feature)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Matched x"),
        s.value.apply_to(d.matched_x)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Shift dx"),
        s.ok.apply_to(d.dx)
    );
    println!(
        "  {:<14}{:.6}",
        s.label.apply_to("SSD"),
        s.value.apply_to(d.score)
    );
    println!(
        "  {:<14}{}x{}",
        s.label.apply_to("Mosaic"),
        mosaic.frame.width(),
        mosaic.frame.height()
    );
}
