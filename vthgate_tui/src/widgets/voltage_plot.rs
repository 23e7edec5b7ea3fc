use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};
use vthgate_sim::Waveform;

/// Voltage against time for one simulated gate.
pub struct VoltagePlot<'a> {
    waveform: &'a Waveform,
    points: Vec<(f64, f64)>,
    block: Option<Block<'a>>,
    style: Style,
}

impl<'a> VoltagePlot<'a> {
    pub fn new(waveform: &'a Waveform) -> Self {
        Self {
            waveform,
            points: waveform.points(),
            block: None,
            style: Style::default().cyan(),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn title(&self) -> String {
        format!(
            "{} Gate Output Response ({}-input)",
            self.waveform.gate_name, self.waveform.width
        )
    }

    pub fn time_bounds(&self) -> [f64; 2] {
        [0.0, self.waveform.end_time().max(f64::EPSILON)]
    }

    pub fn voltage_bounds(&self) -> [f64; 2] {
        [-0.1, self.waveform.vdd + 0.1]
    }

    fn time_axis(&self) -> Axis<'a> {
        let [start, end] = self.time_bounds();
        Axis::default()
            .title("Time (s)")
            .bounds([start, end])
            .labels(vec![
                Span::raw(format!("{start:.3}")),
                Span::raw(format!("{:.3}", (start + end) / 2.0)),
                Span::raw(format!("{end:.3}")),
            ])
    }

    fn voltage_axis(&self) -> Axis<'a> {
        Axis::default()
            .title("Voltage (V)")
            .bounds(self.voltage_bounds())
            .labels(vec![
                Span::raw(format!("{:.1}", 0.0)),
                Span::raw(format!("{:.1}", self.waveform.vdd)),
            ])
    }
}

impl Widget for VoltagePlot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = self
            .block
            .clone()
            .unwrap_or_else(|| Block::bordered().title(self.title()));
        let dataset = Dataset::default()
            .name("Vout")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(self.style)
            .data(&self.points);
        Chart::new(vec![dataset])
            .block(block)
            .x_axis(self.time_axis())
            .y_axis(self.voltage_axis())
            .render(area, buf);
    }
}
