// Calendar Year View
// Prints the year grid for a date, with enabled and selected months marked

use anyhow::{anyhow, Result};
use calendar_year_view::services::settings::SettingsService;
use calendar_year_view::{
    ChronoAdapter, DateInput, DateTimeAdapter, Locale, PickerConfig, SelectedMonth, YearView,
};
use chrono::NaiveDateTime;
use clap::Parser;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "calendar-year-view")]
#[command(about = "Print the year grid of a date picker", version)]
struct Args {
    /// Date whose year is displayed (default: today)
    moment: Option<String>,

    /// Config file path (default: platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Earliest selectable date
    #[arg(long)]
    min: Option<String>,

    /// Latest selectable date
    #[arg(long)]
    max: Option<String>,

    /// Selected date; repeat for range start and end
    #[arg(long)]
    selected: Vec<String>,

    /// Month to pick after printing (0-11)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..12))]
    pick: Option<u32>,
}

fn load_config(args: &Args) -> Result<PickerConfig> {
    let service = match &args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location(),
    };
    service.get()
}

fn marker(view: &YearView<ChronoAdapter>, month: u32) -> &'static str {
    let selected = view
        .selected_months()
        .iter()
        .flatten()
        .any(|m| *m == SelectedMonth::InYear(month));
    if selected {
        "*"
    } else if view.today_month() == Some(SelectedMonth::InYear(month)) {
        "+"
    } else {
        " "
    }
}

fn print_grid(view: &YearView<ChronoAdapter>) -> Result<()> {
    let adapter = view.adapter();
    let moment = view
        .picker_moment()
        .ok_or_else(|| anyhow!("No picker moment"))?;
    println!("{}", adapter.format(moment, &view.formats().month_year_label)?);

    for row in view.months().rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let label = if cell.enabled {
                    cell.label.clone()
                } else {
                    format!("({})", cell.label)
                };
                format!("{}{:<10}", marker(view, cell.value), label)
            })
            .collect();
        println!("{}", line.join(" "));
    }

    let outside: Vec<String> = view
        .selected_months()
        .iter()
        .flatten()
        .filter_map(|m| match m {
            SelectedMonth::BeforeYear => Some("selection before this year".to_string()),
            SelectedMonth::AfterYear => Some("selection after this year".to_string()),
            SelectedMonth::InYear(_) => None,
        })
        .collect();
    for note in outside {
        println!("  ({})", note);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let locale: Locale = config.locale.parse()?;
    log::info!("Starting year view in {} ({} mode)", locale, config.select_mode);

    let adapter = Rc::new(ChronoAdapter::new(locale));
    let mut view = YearView::new(Rc::clone(&adapter), config.formats.clone());
    view.set_select_mode(config.select_mode);

    let moment: DateInput<NaiveDateTime> = args.moment.clone().map_or(DateInput::Empty, DateInput::Text);
    view.set_picker_moment(moment)?;
    view.set_min_date(args.min.clone().map_or(DateInput::Empty, DateInput::Text))?;
    view.set_max_date(args.max.clone().map_or(DateInput::Empty, DateInput::Text))?;
    if view.is_in_range_mode() {
        view.set_selecteds(args.selected.iter().map(String::as_str));
    } else if let Some(first) = args.selected.first() {
        view.set_selected(first.as_str());
    }

    view.after_content_init()?;
    print_grid(&view)?;

    if let Some(month) = args.pick {
        match view.select_month(month)? {
            Some(date) => println!(
                "Picked: {}",
                adapter.format(&date, &view.formats().date_a11y_label)?
            ),
            None => println!("Nothing picked"),
        }
    }

    view.destroy();
    Ok(())
}
