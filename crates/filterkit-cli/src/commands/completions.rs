use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Command, CommandFactory};
use clap_complete::{generate, Shell};
use filterkit_core::FilterName;
use std::io::{self, Write};

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(args.shell, &mut stdout);
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = completion_command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

// `apply --chain` takes a whole expression, so filter names are only offered
// as completion candidates and never enforced when parsing.
fn completion_command() -> Command {
    let filter_names = FilterName::ALL.map(FilterName::as_str);
    crate::Cli::command().mut_subcommand("apply", |apply| {
        apply.mut_arg("chain", |chain| {
            chain.value_parser(PossibleValuesParser::new(filter_names))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::{completion_command, write_completions};
    use clap_complete::Shell;

    #[test]
    fn chain_completions_offer_filter_names() {
        let cmd = completion_command();
        let apply = cmd.find_subcommand("apply").expect("apply subcommand");
        let chain = apply
            .get_arguments()
            .find(|arg| arg.get_id() == "chain")
            .expect("chain arg");
        let names: Vec<String> = chain
            .get_possible_values()
            .iter()
            .map(|value| value.get_name().to_string())
            .collect();
        assert!(names.contains(&"secondConversion".to_string()));
        assert!(names.contains(&"trustedResourceUrl".to_string()));
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn runtime_chain_arg_stays_free_form() {
        let cmd = <crate::Cli as clap::CommandFactory>::command();
        let apply = cmd.find_subcommand("apply").expect("apply subcommand");
        let chain = apply
            .get_arguments()
            .find(|arg| arg.get_id() == "chain")
            .expect("chain arg");
        assert!(chain.get_possible_values().is_empty());
    }

    #[test]
    fn fish_script_lists_filters() {
        let mut out = Vec::new();
        write_completions(Shell::Fish, &mut out);
        let script = String::from_utf8(out).expect("utf8");
        assert!(script.contains("filterkit"));
        assert!(script.contains("regex"));
        assert!(script.contains("secondConversion"));
    }
}
