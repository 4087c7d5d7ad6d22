use plotters::prelude::*;

use super::Series;

/// Plots the per iteration best fitness trace of an optimization run
pub fn plot_convergence(history: &[f64], filename: &str, dims: (u32, u32)) {
    if history.is_empty() {
        warn!("empty history, nothing to plot");
        return;
    }
    info!("n_iterations: {}", history.len());

    let series: Series = history.iter().enumerate().map(|(i, f)| (i as f64, *f)).collect();

    let x_max = history.len().max(2) as f64 - 1.0;
    let mut fit_min: f64 = history[0];
    let mut fit_max: f64 = history[history.len() - 1];
    for f in history {
        if *f < fit_min {
            fit_min = *f;
        }
        if *f > fit_max {
            fit_max = *f;
        }
    }
    // A flat trace still needs a drawable y range
    if fit_min == fit_max {
        fit_min -= 1.0;
        fit_max += 1.0;
    }
    info!("fit_min: {}, fit_max: {}", fit_min, fit_max);

    let root_area = BitMapBackend::new(filename, dims).into_drawing_area();
    root_area.fill(&WHITE).unwrap();
    let root_area = root_area.titled(filename, ("sans-serif", 20).into_font()).unwrap();

    let mut cc0 = ChartBuilder::on(&root_area)
        .margin(5)
        .set_all_label_area_size(50)
        .caption("convergence", ("sans-serif", 30).into_font().with_color(&BLACK))
        .build_cartesian_2d(0.0..x_max, fit_min..fit_max)
        .unwrap();
    cc0.configure_mesh()
        .x_labels(20)
        .y_labels(20)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.4}", v))
        .draw()
        .unwrap();

    cc0.draw_series(LineSeries::new(series, &RED))
        .unwrap()
        .label("best fitness")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    cc0.configure_series_labels().border_style(&BLACK).draw().unwrap();

    // The file is only written on present, and the present run by Drop
    // swallows the I/O error
    root_area.present().unwrap();

    info!("successfully plotted to {}", filename);
}
