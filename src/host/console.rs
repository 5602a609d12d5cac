//! Terminal implementation of [`Host`].

use std::path::PathBuf;

use async_trait::async_trait;
use console::style;

use crate::host::{Host, PickKind, PickRequest, COPY_TO_LOG};
use crate::output::{print_error, print_info, print_warning};

/// Host backed by command-line arguments and the terminal.
///
/// The "picker" answers with the path given on the command line. Relative
/// paths are taken from the picker's starting folder.
#[derive(Debug, Clone, Default)]
pub struct ConsoleHost {
    selection: Option<PathBuf>,
    token: Option<String>,
    copy_to_log: bool,
}

impl ConsoleHost {
    pub fn new(selection: Option<PathBuf>, token: Option<String>, copy_to_log: bool) -> Self {
        Self {
            selection,
            token,
            copy_to_log,
        }
    }
}

#[async_trait]
impl Host for ConsoleHost {
    async fn pick(&self, request: &PickRequest) -> Option<PathBuf> {
        let Some(selection) = self.selection.as_ref() else {
            print_warning(&format!("{}: nothing selected", request.title));
            return None;
        };

        let selection = if selection.is_relative() {
            request.default_path.join(selection)
        } else {
            selection.clone()
        };

        let matches_kind = match request.kind {
            PickKind::File => selection.is_file(),
            PickKind::Directory => selection.is_dir(),
        };

        if !matches_kind {
            print_error(&format!(
                "{} is not an existing {}",
                selection.display(),
                request.kind
            ));
            return None;
        }

        Some(selection)
    }

    async fn show_message(&self, title: &str, message: &str, buttons: &[&str]) -> usize {
        if title.eq_ignore_ascii_case("error") {
            print_error(message);
            return 0;
        }

        println!();
        println!("{}", style(title).bold());
        println!("{}", message);
        println!();

        if self.copy_to_log && buttons.len() > COPY_TO_LOG {
            print_info(&format!("Selected: {}", buttons[COPY_TO_LOG]));
            COPY_TO_LOG
        } else {
            0
        }
    }

    async fn access_token(&self) -> Option<String> {
        self.token.clone().filter(|token| !token.trim().is_empty())
    }
}
