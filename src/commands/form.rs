//! Record form shared by `add` and `edit`.
//!
//! Every field can be passed as a flag; whatever is missing is asked for
//! interactively. When editing, prompts start from the stored values.

use crate::libs::{
    duration::{MAX_HOURS, MAX_MINUTES},
    messages::Message,
    record::{RecordDraft, SocialContext, StudyRecord, Subject, DATE_FORMAT},
};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args, Default)]
pub struct FormArgs {
    /// Student name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Study date, YYYY-MM-DD or "today"
    #[arg(short, long)]
    pub date: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_HOURS as i64))]
    pub hours: Option<u32>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_MINUTES as i64))]
    pub minutes: Option<u32>,

    #[arg(short, long, value_enum)]
    pub subject: Option<Subject>,

    #[arg(short, long, value_enum)]
    pub context: Option<SocialContext>,
}

pub fn collect(args: FormArgs, current: Option<&StudyRecord>) -> Result<RecordDraft> {
    let theme = ColorfulTheme::default();

    let student_name = match args.name {
        Some(name) => name,
        None => Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptStudentName.to_string())
            .default(current.map(|r| r.student_name.clone()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?,
    };

    let date = match args.date {
        Some(date) => parse_date(&date)?,
        None => {
            let default = current.map(|r| r.date).unwrap_or_else(|| Local::now().date_naive());
            let input = Input::<String>::with_theme(&theme)
                .with_prompt(Message::PromptDate.to_string())
                .default(default.format(DATE_FORMAT).to_string())
                .validate_with(|input: &String| -> Result<(), String> { parse_date(input).map(|_| ()).map_err(|e| e.to_string()) })
                .interact_text()?;
            parse_date(&input)?
        }
    };

    let hours = match args.hours {
        Some(hours) => hours,
        None => prompt_number(&theme, Message::PromptHours, current.map_or(0, |r| r.duration.hours), MAX_HOURS, Message::HoursRange(MAX_HOURS))?,
    };

    let minutes = match args.minutes {
        Some(minutes) => minutes,
        None => prompt_number(
            &theme,
            Message::PromptMinutes,
            current.map_or(0, |r| r.duration.minutes),
            MAX_MINUTES,
            Message::MinutesRange(MAX_MINUTES),
        )?,
    };

    let subject = match args.subject {
        Some(subject) => subject,
        None => {
            let labels: Vec<&str> = Subject::ALL.iter().map(|s| s.label()).collect();
            let default = current.and_then(|r| Subject::ALL.iter().position(|s| *s == r.subject)).unwrap_or(0);
            let selection = Select::with_theme(&theme)
                .with_prompt(Message::PromptSubject.to_string())
                .items(&labels)
                .default(default)
                .interact()?;
            Subject::ALL[selection]
        }
    };

    let context = match args.context {
        Some(context) => context,
        None => {
            let labels: Vec<&str> = SocialContext::ALL.iter().map(|c| c.label()).collect();
            let default = current.and_then(|r| SocialContext::ALL.iter().position(|c| *c == r.context)).unwrap_or(0);
            let selection = Select::with_theme(&theme)
                .with_prompt(Message::PromptContext.to_string())
                .items(&labels)
                .default(default)
                .interact()?;
            SocialContext::ALL[selection]
        }
    };

    Ok(RecordDraft {
        student_name,
        date,
        hours,
        minutes,
        subject,
        context,
    })
}

fn prompt_number(theme: &ColorfulTheme, prompt: Message, default: u32, max: u32, range_msg: Message) -> Result<u32> {
    let range_msg = range_msg.to_string();
    let value = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .default(default)
        .validate_with(|input: &u32| -> Result<(), &str> {
            if *input <= max {
                Ok(())
            } else {
                Err(range_msg.as_str())
            }
        })
        .interact_text()?;
    Ok(value)
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDate(input.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-31").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(parse_date("Today").unwrap(), Local::now().date_naive());
        assert!(parse_date("31/01/2024").is_err());
    }
}
