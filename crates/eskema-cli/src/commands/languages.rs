use eskema_emit::{emitter_for, supported_languages, EmitOptions};

use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `languages` command: list every available emitter.
pub fn run(output: &OutputContext) -> Result<(), CliError> {
    let options = EmitOptions::default();
    let emitters: Vec<_> = supported_languages()
        .iter()
        .filter_map(|name| emitter_for(name, &options))
        .collect();

    match output.mode {
        OutputMode::Human => {
            for emitter in &emitters {
                println!("{:<8} .{}", emitter.name(), emitter.file_extension());
            }
        }
        OutputMode::Json => {
            let list: Vec<serde_json::Value> = emitters
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "name": e.name(),
                        "extension": e.file_extension(),
                    })
                })
                .collect();
            output.print_json(&serde_json::Value::Array(list));
        }
        OutputMode::Plain => {
            for emitter in &emitters {
                println!("{}\t{}", emitter.name(), emitter.file_extension());
            }
        }
    }
    Ok(())
}
