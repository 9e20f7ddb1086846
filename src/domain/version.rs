use crate::domain::BumpKind;
use crate::error::{CommitKitError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Display template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "{major}.{minor}.{patch}-{track}";

/// Release track a version is published on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseTrack {
    Alpha,
    Beta,
    #[default]
    #[serde(alias = "live")]
    Release,
}

impl fmt::Display for ReleaseTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseTrack::Alpha => write!(f, "alpha"),
            ReleaseTrack::Beta => write!(f, "beta"),
            ReleaseTrack::Release => write!(f, "release"),
        }
    }
}

impl FromStr for ReleaseTrack {
    type Err = CommitKitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(ReleaseTrack::Alpha),
            "beta" => Ok(ReleaseTrack::Beta),
            "release" | "live" => Ok(ReleaseTrack::Release),
            other => Err(CommitKitError::version(format!(
                "Unknown release track: '{}'",
                other
            ))),
        }
    }
}

/// Semantic version on a release track, rendered through a template.
///
/// Versions are values: [`Version::bump`] returns a new version and leaves
/// the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "VersionJson", from = "VersionJson")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub track: ReleaseTrack,
    pub template: String,
    pub include_track: bool,
    pub include_release: bool,
}

impl Default for Version {
    fn default() -> Self {
        Version {
            major: 0,
            minor: 0,
            patch: 1,
            track: ReleaseTrack::Release,
            template: DEFAULT_TEMPLATE.to_string(),
            include_track: true,
            include_release: false,
        }
    }
}

impl Version {
    /// Create a release-track version with the default template
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            ..Version::default()
        }
    }

    /// Same numbers on another track
    pub fn with_track(mut self, track: ReleaseTrack) -> Self {
        self.track = track;
        self
    }

    /// Same numbers rendered through another template
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Parse a version from a tag string.
    ///
    /// Any non-digit prefix is dropped (`v1.2.3`, `release-1.2.3`). A
    /// pre-release identifier selects the track: `1.2.3-beta` is on
    /// [`ReleaseTrack::Beta`], a bare `1.2.3` is a release.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean = tag.trim().trim_start_matches(|c: char| !c.is_ascii_digit());
        let parsed = semver::Version::parse(clean).map_err(|e| {
            CommitKitError::version(format!("Invalid version '{}': {}", tag, e))
        })?;

        let track = match parsed.pre.as_str() {
            "" => ReleaseTrack::Release,
            pre => pre.split('.').next().unwrap_or(pre).parse()?,
        };

        let component = |value: u64, name: &str| {
            u32::try_from(value).map_err(|_| {
                CommitKitError::version(format!("{} version out of range: {}", name, value))
            })
        };

        Ok(Version {
            major: component(parsed.major, "Major")?,
            minor: component(parsed.minor, "Minor")?,
            patch: component(parsed.patch, "Patch")?,
            track,
            ..Version::default()
        })
    }

    /// Apply a bump, returning the bumped version
    ///
    /// # Returns
    /// * `Err` - If the bumped component would exceed `u32::MAX`
    pub fn bump(&self, bump: BumpKind) -> Result<Self> {
        let increment = |value: u32, name: &str| {
            value.checked_add(1).ok_or_else(|| {
                CommitKitError::version(format!(
                    "{} version {} cannot be bumped further",
                    name, value
                ))
            })
        };

        let mut next = self.clone();
        match bump {
            BumpKind::Major => {
                next.major = increment(self.major, "Major")?;
                next.minor = 0;
                next.patch = 0;
            }
            BumpKind::Minor => {
                next.minor = increment(self.minor, "Minor")?;
                next.patch = 0;
            }
            BumpKind::Patch => {
                next.patch = increment(self.patch, "Patch")?;
            }
            BumpKind::None => {}
        }
        Ok(next)
    }

    /// Render the template.
    ///
    /// The track is left out when `include_track` is off, and the release
    /// track is left out unless `include_release` is on. Separators left
    /// dangling at either end are stripped.
    pub fn display_string(&self) -> String {
        let track = if !self.include_track
            || (self.track == ReleaseTrack::Release && !self.include_release)
        {
            String::new()
        } else {
            self.track.to_string()
        };

        let rendered = self
            .template
            .replace("{major}", &self.major.to_string())
            .replace("{minor}", &self.minor.to_string())
            .replace("{patch}", &self.patch.to_string())
            .replace("{track}", &track);

        rendered
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_string()
    }

    /// Order by major, then minor, then patch. The track is ignored.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch))
    }

    /// The newest version in `versions`.
    ///
    /// Among equal versions the one listed last wins, matching a stable sort
    /// followed by a reversal.
    pub fn latest(versions: &[Version]) -> Option<&Version> {
        let mut sorted: Vec<&Version> = versions.iter().collect();
        sorted.sort_by(|a, b| Version::compare(a, b));
        sorted.reverse();
        sorted.first().copied()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

/// Serialized form of a [`Version`], carrying the rendered display string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionJson {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    #[serde(default)]
    pub track: ReleaseTrack,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_true")]
    pub include_track: bool,
    #[serde(default)]
    pub include_release: bool,
    #[serde(default, skip_deserializing)]
    pub display: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_true() -> bool {
    true
}

impl From<Version> for VersionJson {
    fn from(version: Version) -> Self {
        let display = version.display_string();
        VersionJson {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            track: version.track,
            template: version.template,
            include_track: version.include_track,
            include_release: version.include_release,
            display,
        }
    }
}

impl From<VersionJson> for Version {
    fn from(json: VersionJson) -> Self {
        Version {
            major: json.major,
            minor: json.minor,
            patch: json.patch,
            track: json.track,
            template: json.template,
            include_track: json.include_track,
            include_release: json.include_release,
        }
    }
}
