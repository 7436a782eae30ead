use log::error;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;
use symptom_sniffer::{DiagnosisView, KnowledgeBase, DEFAULT_DIAGNOSIS_CONFIG};

fn main() {
    // Initialize the logger
    env_logger::init();

    let knowledge_base = match KnowledgeBase::embedded() {
        Ok(knowledge_base) => knowledge_base,
        Err(e) => {
            error!("Failed to load knowledge base: {}", e);
            std::process::exit(1);
        }
    };

    let mut view = DiagnosisView::new(DEFAULT_DIAGNOSIS_CONFIG, &knowledge_base);

    if let Err(e) = run(&mut view, io::stdin().lock(), io::stdout().lock()) {
        error!("Failed to process input: {}", e);
        std::process::exit(1);
    }
}

/// Treats each input line as typing into the input field followed by pressing Enter.
fn run<R: BufRead, W: Write>(view: &mut DiagnosisView, input: R, mut output: W) -> io::Result<()> {
    write!(output, "{}", view)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        view.set_query(&line);

        // Blank lines are refused by the submit guard
        if !view.submit(Instant::now()) {
            continue;
        }

        writeln!(output)?;
        write!(output, "{}", view)?;
        output.flush()?;

        while let Some(ready_at) = view.ready_at() {
            let now = Instant::now();
            if view.poll(now) {
                break;
            }
            thread::sleep(ready_at.saturating_duration_since(now));
        }

        writeln!(output)?;
        write!(output, "{}", view)?;
        output.flush()?;
    }

    Ok(())
}
