// SPDX-License-Identifier: MPL-2.0
use glass_gallery::app::{self, Flags, Screen};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or(None);
    let section_id: Option<String> = args.opt_value_from_str("--section").unwrap_or(None);

    let start_screen = match section_id {
        Some(id) => match Screen::from_id(&id) {
            Ok(screen) => Some(screen),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
        None => None,
    };

    app::run(Flags { lang, start_screen })
}
