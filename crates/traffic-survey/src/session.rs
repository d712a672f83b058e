//! The interactive select, analyse, report and chart loop.

use crate::date_selector::{prompt_line, DateSelector, SelectedDate};
use crate::error::SurveyResult;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use traffic_analysis::{analyze, format_entries, load_dataset, write_report, TrafficRecord};
use traffic_config::Config;
use traffic_graphs::{render_histogram, BitmapHistogramRenderer, ChartRenderer};

const CONTINUE_PROMPT: &str = "Do you want to select a data file for a different date? (Y/N): ";
const DISMISS_PROMPT: &str = "Press Enter to close the histogram...";

/// One interactive run over a pair of console streams.
pub struct Session<R, W> {
    config: Config,
    input: R,
    output: W,
    renderer: Box<dyn ChartRenderer>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session drawing charts with the bitmap renderer.
    pub fn new(config: Config, input: R, output: W) -> Self {
        let renderer = Box::new(BitmapHistogramRenderer::from(&config.chart));
        Self::with_renderer(config, input, output, renderer)
    }

    /// Creates a session with a custom chart renderer.
    pub fn with_renderer(
        config: Config,
        input: R,
        output: W,
        renderer: Box<dyn ChartRenderer>,
    ) -> Self {
        Self {
            config,
            input,
            output,
            renderer,
        }
    }

    /// Runs until the user declines another date.
    ///
    /// Dataset and output problems are reported on the console and do not
    /// end the session; only console I/O failures and closed input do.
    pub fn run(&mut self) -> SurveyResult<()> {
        loop {
            let selected = DateSelector::from_config(&self.config.data)
                .select(&mut self.input, &mut self.output)?;
            self.process(&selected)?;

            if !self.ask_continue()? {
                writeln!(self.output, "Exiting the program.")?;
                info!("Session finished");
                return Ok(());
            }
        }
    }

    /// Loads, analyses, reports and charts one selected date.
    #[instrument(skip_all, fields(key = %selected.date.key()))]
    pub fn process(&mut self, selected: &SelectedDate) -> SurveyResult<()> {
        let key = selected.date.key();
        let path = self.config.data.data_dir.join(&selected.file_name);

        let records = match load_dataset(&path) {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "Dataset could not be loaded");
                writeln!(self.output, "Error loading data: {err}")?;
                return Ok(());
            }
        };

        writeln!(self.output, "Analyzing data for {key}...")?;
        self.report(&records, &key)?;

        if self.config.chart.enabled {
            self.chart(&records, selected)?;
        }
        Ok(())
    }

    fn report(&mut self, records: &[TrafficRecord], key: &str) -> SurveyResult<()> {
        let stats = match analyze(records) {
            Ok(stats) => stats,
            Err(err) => {
                warn!(error = %err, category = err.category(), "Analysis failed");
                writeln!(self.output, "Error processing data: {err}")?;
                return Ok(());
            }
        };

        for line in format_entries(&stats) {
            writeln!(self.output, "{line}")?;
        }

        match write_report(&stats, &self.config.report.output_dir, key) {
            Ok(path) => writeln!(self.output, "Results saved to {}.", path.display())?,
            Err(err) => writeln!(self.output, "Error saving results: {err}")?,
        }
        Ok(())
    }

    fn chart(&mut self, records: &[TrafficRecord], selected: &SelectedDate) -> SurveyResult<()> {
        writeln!(self.output, "Generating histogram...")?;

        let rendered = render_histogram(
            self.renderer.as_ref(),
            records,
            &selected.date,
            &self.config.report.output_dir,
        );
        match rendered {
            Ok(path) => {
                writeln!(self.output, "Histogram saved to {}.", path.display())?;
                if self.config.chart.wait_for_dismiss {
                    prompt_line(&mut self.input, &mut self.output, DISMISS_PROMPT)?;
                }
            }
            Err(err) => {
                warn!(error = %err, "Histogram rendering failed");
                writeln!(self.output, "Error generating histogram: {err}")?;
            }
        }
        Ok(())
    }

    /// Asks whether to pick another date until the answer is Y or N.
    pub fn ask_continue(&mut self) -> SurveyResult<bool> {
        loop {
            let answer = prompt_line(&mut self.input, &mut self.output, CONTINUE_PROMPT)?;
            match answer.trim() {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                _ => writeln!(
                    self.output,
                    "Invalid input. Please enter 'Y' for yes or 'N' for no."
                )?,
            }
        }
    }
}
