//! Walks through the eager, deferred, and lazy pipelines over one live roster.

use std::io::Write;

use roster_seeker::Source;
use tracing::{debug, info_span};

use crate::console::Console;
use crate::data;
use crate::error::Result;
use crate::model::{Employee, SalaryLine};
use crate::pipelines;

/// Runs the demonstration and writes its transcript to `console`.
///
/// Steps, in order:
///
/// 1. eager query over the initial four employees (`Eager - `);
/// 2. deferred query built, Sam Sulek hired, then traversed (`Deferred - `);
/// 3. lazy query traversed with a visit hook (`Accessing employee: ` lines
///    interleaved with `Lazy - `);
/// 4. Jonah Davis hired, the same lazy query collected in one go
///    (all visits, then `Immediate - `);
/// 5. the step 1 result printed again (`Eager (unchanged) - `).
pub fn run<W: Write + 'static>(console: &Console<W>) -> Result<()> {
    let staff = Source::new(data::employees());
    let departments = data::departments();
    debug!(
        employees = staff.len(),
        departments = departments.len(),
        "roster loaded"
    );

    let eager = {
        let _step = info_span!("eager").entered();
        staff.with(pipelines::eager_high_earners)
    };
    print_lines(console, "Eager", &eager);

    {
        let _step = info_span!("deferred").entered();
        let deferred = pipelines::deferred_high_earners(&staff);
        staff.push(data::sam_sulek());
        debug!(employees = staff.len(), "hired after deferred query was built");
        for line in &deferred {
            console.line(format_args!("Deferred - {line}"));
        }
    }

    let hook = console.clone();
    let lazy = pipelines::high_salaried_employees(&staff).on_visit(move |employee: &Employee| {
        hook.line(format_args!("Accessing employee: {}", employee.full_name()));
    });

    {
        let _step = info_span!("lazy").entered();
        for employee in &lazy {
            console.line(format_args!("Lazy - {}", pipelines::salary_line(&employee)));
        }
    }

    let immediate: Vec<SalaryLine> = {
        let _step = info_span!("immediate").entered();
        staff.push(data::jonah_davis());
        lazy.iter().map(|employee| pipelines::salary_line(&employee)).collect()
    };
    print_lines(console, "Immediate", &immediate);

    print_lines(console, "Eager (unchanged)", &eager);

    console.finish()
}

fn print_lines<W: Write>(console: &Console<W>, label: &str, lines: &[SalaryLine]) {
    for line in lines {
        console.line(format_args!("{label} - {line}"));
    }
}
