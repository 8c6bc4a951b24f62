use error_stack::{Context, Report};

/// Figment errors carry the failing key and where it was read from;
/// this copies those details into the report so a bad config file or
/// environment variable can be pinpointed.
pub trait FigmentErrorAttachable<T: Context> {
    fn attach_figment_error(self, err: figment::Error) -> Report<T>;
}

impl<T: Context> FigmentErrorAttachable<T> for Report<T> {
    fn attach_figment_error(self, error: figment::Error) -> Report<T> {
        // figment chains every error it found while extracting
        error.into_iter().fold(self, |report, e| {
            let mut line = e.kind.to_string();

            if let (Some(profile), Some(md)) = (&e.profile, &e.metadata) {
                if !e.path.is_empty() {
                    let key = md.interpolate(profile, &e.path);
                    line.push_str(&format!(" for key {key:?}"));
                }
            }

            if let Some(md) = &e.metadata {
                match &md.source {
                    Some(source) => line.push_str(&format!(" in {source} {}", md.name)),
                    None => line.push_str(&format!(" in {}", md.name)),
                }
            }

            report.attach_printable(line)
        })
    }
}
