mod voltage_plot;

pub use voltage_plot::VoltagePlot;
