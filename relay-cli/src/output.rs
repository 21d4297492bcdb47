// relay-cli/src/output.rs
use clap::ValueEnum;
use comfy_table::{presets::NOTHING, Table};
use relay_client::{
    DomainAddress, ExportData, ExportError, InboundContact, MaskError, MaskList, PhoneNumberOption,
    Profile, RealPhone, RelayAddress, RelayError, RelayNumber, RelayNumberSuggestions, TaggedMask,
    User,
};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Longer text fields are cut down to this many characters
const MAX_FIELD_WIDTH: usize = 30;

/// Output format option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Everything a command can print
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Users(Vec<User>),
    Profiles(Vec<Profile>),
    Masks(Vec<TaggedMask>),
    RandomMasks(Vec<RelayAddress>),
    RandomMask(RelayAddress),
    CustomMasks(Vec<DomainAddress>),
    CustomMask(DomainAddress),
    PhoneMasks(Vec<RelayNumber>),
    PhoneMask(RelayNumber),
    Contacts(Vec<InboundContact>),
    Contact(InboundContact),
    ForwardingNumbers(Vec<RealPhone>),
    ForwardingNumber(RealPhone),
    Suggestions(RelayNumberSuggestions),
    NumberOptions(Vec<PhoneNumberOption>),
    /// No table layout; text mode prints JSON
    Export(ExportData),
}

impl From<MaskList> for Output {
    fn from(list: MaskList) -> Self {
        match list {
            MaskList::Tagged(masks) => Output::Masks(masks),
            MaskList::Random(masks) => Output::RandomMasks(masks),
            MaskList::Custom(masks) => Output::CustomMasks(masks),
        }
    }
}

/// A single mask prints as the bare record, without its tag
impl From<TaggedMask> for Output {
    fn from(mask: TaggedMask) -> Self {
        match mask {
            TaggedMask::Random(m) => Output::RandomMask(m),
            TaggedMask::Custom(m) => Output::CustomMask(m),
        }
    }
}

/// Write `output` to stdout
pub fn print(format: OutputFormat, output: &Output) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render(&mut lock, format, output)
}

pub fn render<W: Write>(w: &mut W, format: OutputFormat, output: &Output) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(w, output),
        OutputFormat::Text => write_text(w, output),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

fn write_text<W: Write>(w: &mut W, output: &Output) -> io::Result<()> {
    match output {
        Output::Users(users) => write_table(
            w,
            "No users found.",
            &["EMAIL"],
            users.iter().map(|u| vec![u.email.clone()]),
        ),
        Output::Profiles(profiles) => write_table(
            w,
            "No profiles found.",
            &["ID", "SUBDOMAIN", "PREMIUM", "PHONE", "FORWARDED", "BLOCKED", "REPLIED"],
            profiles.iter().map(profile_row),
        ),
        Output::Masks(masks) => write_table(
            w,
            "No masks found.",
            &["ID", "TYPE", "ADDRESS", "ENABLED", "DESCRIPTION", "FORWARDED", "BLOCKED"],
            masks.iter().map(tagged_mask_row),
        ),
        Output::RandomMasks(masks) => write_random_masks(w, masks),
        Output::RandomMask(mask) => write_random_masks(w, std::slice::from_ref(mask)),
        Output::CustomMasks(masks) => write_custom_masks(w, masks),
        Output::CustomMask(mask) => write_custom_masks(w, std::slice::from_ref(mask)),
        Output::PhoneMasks(numbers) => write_phone_masks(w, numbers),
        Output::PhoneMask(number) => write_phone_masks(w, std::slice::from_ref(number)),
        Output::Contacts(contacts) => write_contacts(w, contacts),
        Output::Contact(contact) => write_contacts(w, std::slice::from_ref(contact)),
        Output::ForwardingNumbers(phones) => write_forwarding_numbers(w, phones),
        Output::ForwardingNumber(phone) => write_forwarding_numbers(w, std::slice::from_ref(phone)),
        Output::Suggestions(suggestions) => write_suggestions(w, suggestions),
        Output::NumberOptions(options) => write_table(
            w,
            "No phone numbers found.",
            &["NUMBER", "LOCATION", "REGION", "COUNTRY"],
            options.iter().map(|o| {
                vec![
                    o.phone_number.clone(),
                    locality(o),
                    o.region.clone(),
                    o.iso_country.clone(),
                ]
            }),
        ),
        Output::Export(_) => write_json(w, output),
    }
}

fn write_random_masks<W: Write>(w: &mut W, masks: &[RelayAddress]) -> io::Result<()> {
    write_table(
        w,
        "No random masks found.",
        &["ID", "ADDRESS", "ENABLED", "DESCRIPTION", "FORWARDED", "BLOCKED"],
        masks.iter().map(|m| {
            vec![
                m.id.to_string(),
                m.full_address.clone(),
                m.enabled.to_string(),
                truncate(&m.description, MAX_FIELD_WIDTH),
                m.num_forwarded.to_string(),
                m.num_blocked.to_string(),
            ]
        }),
    )
}

fn write_custom_masks<W: Write>(w: &mut W, masks: &[DomainAddress]) -> io::Result<()> {
    write_table(
        w,
        "No custom domain masks found.",
        &["ID", "ADDRESS", "ENABLED", "DESCRIPTION", "FORWARDED", "BLOCKED"],
        masks.iter().map(|m| {
            vec![
                m.id.to_string(),
                m.full_address.clone(),
                m.enabled.to_string(),
                truncate(&m.description, MAX_FIELD_WIDTH),
                m.num_forwarded.to_string(),
                m.num_blocked.to_string(),
            ]
        }),
    )
}

fn write_phone_masks<W: Write>(w: &mut W, numbers: &[RelayNumber]) -> io::Result<()> {
    write_table(
        w,
        "No phone masks found.",
        &["ID", "NUMBER", "ENABLED", "LOCATION", "TEXTS LEFT", "MINS LEFT"],
        numbers.iter().map(|n| {
            vec![
                n.id.to_string(),
                n.number.clone(),
                n.enabled.to_string(),
                n.location.clone(),
                n.remaining_texts.to_string(),
                n.remaining_minutes.to_string(),
            ]
        }),
    )
}

fn write_contacts<W: Write>(w: &mut W, contacts: &[InboundContact]) -> io::Result<()> {
    write_table(
        w,
        "No inbound contacts found.",
        &["ID", "NUMBER", "BLOCKED", "CALLS", "TEXTS", "LAST CONTACT"],
        contacts.iter().map(|c| {
            vec![
                c.id.to_string(),
                c.inbound_number.clone(),
                c.blocked.to_string(),
                c.num_calls.to_string(),
                c.num_texts.to_string(),
                c.last_inbound_date.to_rfc3339(),
            ]
        }),
    )
}

fn write_forwarding_numbers<W: Write>(w: &mut W, phones: &[RealPhone]) -> io::Result<()> {
    write_table(
        w,
        "No forwarding numbers found.",
        &["ID", "NUMBER", "VERIFIED", "COUNTRY"],
        phones.iter().map(|p| {
            vec![
                p.id.to_string(),
                p.number.clone(),
                p.verified.to_string(),
                p.country_code.clone(),
            ]
        }),
    )
}

fn write_suggestions<W: Write>(w: &mut W, suggestions: &RelayNumberSuggestions) -> io::Result<()> {
    if let Some(real) = &suggestions.real_num {
        writeln!(w, "Real Number: {}\n", real)?;
    }

    let sections = [
        ("Same Prefix Options", &suggestions.same_prefix_options),
        ("Same Area Options", &suggestions.same_area_options),
        ("Other Areas Options", &suggestions.other_areas_options),
        ("Random Options", &suggestions.random_options),
    ];

    for (title, options) in sections {
        if options.is_empty() {
            continue;
        }
        writeln!(w, "{}:", title)?;
        let rows = options
            .iter()
            .map(|o| vec![o.phone_number.clone(), locality(o), o.region.clone()])
            .collect();
        let table = build_table(&["NUMBER", "LOCATION", "REGION"], rows);
        for line in table.lines() {
            writeln!(w, "  {}", line.trim_end())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn profile_row(p: &Profile) -> Vec<String> {
    vec![
        p.id.to_string(),
        p.subdomain.clone().unwrap_or_else(|| "-".to_string()),
        p.has_premium.to_string(),
        p.has_phone.to_string(),
        p.emails_forwarded.to_string(),
        p.emails_blocked.to_string(),
        p.emails_replied.to_string(),
    ]
}

fn tagged_mask_row(m: &TaggedMask) -> Vec<String> {
    vec![
        m.id().to_string(),
        m.label().to_string(),
        m.full_address().to_string(),
        m.enabled().to_string(),
        truncate(m.description(), MAX_FIELD_WIDTH),
        m.num_forwarded().to_string(),
        m.num_blocked().to_string(),
    ]
}

fn locality(option: &PhoneNumberOption) -> String {
    option.locality.clone().unwrap_or_else(|| "-".to_string())
}

fn write_table<W, I>(w: &mut W, empty: &str, header: &[&str], rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let rows: Vec<Vec<String>> = rows.into_iter().collect();
    if rows.is_empty() {
        return writeln!(w, "{}", empty);
    }

    let table = build_table(header, rows);
    for line in table.lines() {
        writeln!(w, "{}", line.trim_end())?;
    }
    Ok(())
}

fn build_table(header: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }
    table
}

/// Flatten line breaks and tabs, then cut to `max` characters ending in `...`
pub fn truncate(s: &str, max: usize) -> String {
    let flat = s.replace(['\n', '\t'], " ");
    if flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Exit codes for scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// Network failure, timeout or interrupt
    TransientError = 1,
    /// API rejection, bad input or configuration
    PermanentError = 2,
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::TransientError => write!(f, "transient_error"),
            Self::PermanentError => write!(f, "permanent_error"),
        }
    }
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn for_error(err: &anyhow::Error) -> Self {
        let transient = err.chain().any(|cause| {
            if let Some(e) = cause.downcast_ref::<RelayError>() {
                return e.is_transport();
            }
            if let Some(MaskError::Relay(e)) = cause.downcast_ref::<MaskError>() {
                return e.is_transport();
            }
            if let Some(e) = cause.downcast_ref::<ExportError>() {
                return e.failures.iter().any(|f| f.source.is_transport());
            }
            false
        });

        if transient {
            ExitCode::TransientError
        } else {
            ExitCode::PermanentError
        }
    }
}

/// Print a styled success message
pub fn print_success(message: &str) {
    let term = console::Term::stdout();
    let _ = term.write_str(&format!("{} {}\n", console::style("✓").green(), message));
}

/// Print a styled error message
pub fn print_error(message: &str) {
    let term = console::Term::stderr();
    let _ = term.write_str(&format!("{} {}\n", console::style("Error:").red(), message));
}
