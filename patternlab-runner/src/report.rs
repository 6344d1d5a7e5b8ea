//! Report rendering — plain text for the terminal, JSON for tooling.

use crate::runner::RunReport;

impl RunReport {
    /// Every step output in execution order.
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.scenarios
            .iter()
            .flat_map(|s| s.steps.iter().map(|step| step.output.as_str()))
    }

    /// One output per line, nothing else. For the demo this is exactly what
    /// the pattern walkthrough prints.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for line in self.outputs() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Text report with a header per scenario and the producing label per line.
    pub fn render_verbose(&self) -> String {
        let mut out = String::new();
        for scenario in &self.scenarios {
            out.push_str(&format!("== {} ({:?})\n", scenario.name, scenario.pattern));
            let width = scenario
                .steps
                .iter()
                .map(|s| s.label.len())
                .max()
                .unwrap_or(0);
            for step in &scenario.steps {
                out.push_str(&format!("  {:<width$}  {}\n", step.label, step.output));
            }
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
