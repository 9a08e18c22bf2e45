use crate::core::report;
use crate::core::solver::Solver;
use crate::domain::ports::{ConfigProvider, OutputSink};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub count: usize,
    pub location: String,
}

pub struct PuzzleEngine<C: ConfigProvider, S: OutputSink> {
    config: C,
    sink: S,
    monitor_enabled: bool,
}

impl<C: ConfigProvider, S: OutputSink> PuzzleEngine<C, S> {
    pub fn new(config: C, sink: S) -> Self {
        Self::new_with_monitoring(config, sink, false)
    }

    pub fn new_with_monitoring(config: C, sink: S, monitor_enabled: bool) -> Self {
        Self {
            config,
            sink,
            monitor_enabled,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        let format = self.config.output_format();

        let solver = Solver::new(self.config.params().clone())?;
        tracing::info!(
            "Searching {} candidates ({} check)",
            solver.search_space(),
            solver.params().check.as_str()
        );

        let solution = solver.solve();
        tracing::info!("Found {} combinations", solution.len());
        monitor.log_stats("Solve");

        let rendered = report::render(format, solver.params(), &solution)?;
        let name = match self.config.output_path() {
            Some(path) => path.to_string(),
            None => format!("solutions.{}", format.file_extension()),
        };
        let location = self.sink.write_output(&name, rendered.as_bytes())?;
        tracing::debug!("Rendered {} output to {}", format, location);
        monitor.log_stats("Render");
        monitor.log_final_stats();

        Ok(RunSummary {
            count: solution.len(),
            location,
        })
    }
}
