//! Two-step onboarding wizard.
//!
//! The wizard collects a family-size bucket and a chaos level, then hands a
//! [`SessionConfig`] back to the caller. Both inputs are closed enums, so
//! there is no validation and no error path.

use std::fmt;
use std::str::FromStr;

/// Self-reported volatility of the gathering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChaosLevel {
    Zen,
    Medium,
    Chaotic,
}

impl ChaosLevel {
    pub const ALL: [ChaosLevel; 3] = [ChaosLevel::Zen, ChaosLevel::Medium, ChaosLevel::Chaotic];

    pub fn as_str(self) -> &'static str {
        match self {
            ChaosLevel::Zen => "zen",
            ChaosLevel::Medium => "medium",
            ChaosLevel::Chaotic => "chaotic",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ChaosLevel::Zen => "☮️",
            ChaosLevel::Medium => "😅",
            ChaosLevel::Chaotic => "🚨",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChaosLevel::Zen => "☮️ Zen Mode (Yeah right, but let's pretend)",
            ChaosLevel::Medium => "😅 It's Tuesday (Normal hot mess)",
            ChaosLevel::Chaotic => "🚨 DEFCON 1 (Everything is fine)",
        }
    }
}

impl fmt::Display for ChaosLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChaosLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ChaosLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("invalid chaos level: {value} (expected zen, medium or chaotic)"))
    }
}

/// One of the four family-size ranges offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyBucket {
    FiveToTen,
    ElevenToTwenty,
    TwentyOneToThirty,
    ThirtyPlus,
}

impl FamilyBucket {
    pub const ALL: [FamilyBucket; 4] = [
        FamilyBucket::FiveToTen,
        FamilyBucket::ElevenToTwenty,
        FamilyBucket::TwentyOneToThirty,
        FamilyBucket::ThirtyPlus,
    ];

    /// Raw bucket label as recorded by the wizard.
    pub fn value(self) -> &'static str {
        match self {
            FamilyBucket::FiveToTen => "5-10",
            FamilyBucket::ElevenToTwenty => "11-20",
            FamilyBucket::TwentyOneToThirty => "21-30",
            FamilyBucket::ThirtyPlus => "30+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FamilyBucket::FiveToTen => "🎭 5-10 (Small but mighty)",
            FamilyBucket::ElevenToTwenty => "👨‍👩‍👧‍👦 11-20 (Getting spicy)",
            FamilyBucket::TwentyOneToThirty => "🌪️ 21-30 (Absolute chaos)",
            FamilyBucket::ThirtyPlus => "🔥 30+ (God help you)",
        }
    }

    /// Family count retained for the session: the bucket's lower bound.
    pub fn lower_bound(self) -> u32 {
        parse_lower_bound(self.value()).unwrap_or_default()
    }
}

impl fmt::Display for FamilyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for FamilyBucket {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FamilyBucket::ALL
            .into_iter()
            .find(|bucket| bucket.value() == value.trim())
            .ok_or_else(|| {
                format!("invalid family bucket: {value} (expected 5-10, 11-20, 21-30 or 30+)")
            })
    }
}

/// Parse the leading integer of a bucket label such as `"11-20"` or `"30+"`.
pub fn parse_lower_bound(label: &str) -> Option<u32> {
    let head = label.trim().split(['-', '+']).next()?;
    head.trim().parse().ok()
}

/// Values collected by the wizard. Immutable once the chat starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub family_count: u32,
    pub chaos_level: ChaosLevel,
}

impl SessionConfig {
    pub fn from_selection(bucket: FamilyBucket, chaos_level: ChaosLevel) -> Self {
        Self {
            family_count: bucket.lower_bound(),
            chaos_level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CollectingFamilySize,
    CollectingChaosLevel { bucket: FamilyBucket },
}

#[derive(Debug, Clone)]
pub struct SetupWizard {
    step: WizardStep,
    highlighted: usize,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::CollectingFamilySize,
            highlighted: 0,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Bucket recorded by the first step, if the wizard is past it.
    pub fn recorded_bucket(&self) -> Option<FamilyBucket> {
        match self.step {
            WizardStep::CollectingFamilySize => None,
            WizardStep::CollectingChaosLevel { bucket } => Some(bucket),
        }
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn title(&self) -> &'static str {
        match self.step {
            WizardStep::CollectingFamilySize => {
                "How many family members are descending upon your home?"
            }
            WizardStep::CollectingChaosLevel { .. } => "Choose your chaos level",
        }
    }

    pub fn subtitle(&self) -> Option<String> {
        self.recorded_bucket()
            .map(|bucket| format!("({bucket} people incoming!)"))
    }

    /// Labels for the options of the current step, in display order.
    pub fn option_labels(&self) -> Vec<&'static str> {
        match self.step {
            WizardStep::CollectingFamilySize => {
                FamilyBucket::ALL.iter().map(|bucket| bucket.label()).collect()
            }
            WizardStep::CollectingChaosLevel { .. } => {
                ChaosLevel::ALL.iter().map(|level| level.label()).collect()
            }
        }
    }

    fn option_count(&self) -> usize {
        match self.step {
            WizardStep::CollectingFamilySize => FamilyBucket::ALL.len(),
            WizardStep::CollectingChaosLevel { .. } => ChaosLevel::ALL.len(),
        }
    }

    pub fn move_up(&mut self) {
        let count = self.option_count();
        self.highlighted = (self.highlighted + count - 1) % count;
    }

    pub fn move_down(&mut self) {
        self.highlighted = (self.highlighted + 1) % self.option_count();
    }

    pub fn select_family(&mut self, bucket: FamilyBucket) {
        if self.step != WizardStep::CollectingFamilySize {
            return;
        }
        self.step = WizardStep::CollectingChaosLevel { bucket };
        self.highlighted = 0;
    }

    /// Finish the wizard. Returns the collected configuration, or `None` when
    /// no bucket has been recorded yet.
    pub fn select_chaos(&mut self, level: ChaosLevel) -> Option<SessionConfig> {
        let bucket = self.recorded_bucket()?;
        Some(SessionConfig::from_selection(bucket, level))
    }

    pub fn back(&mut self) {
        if let WizardStep::CollectingChaosLevel { .. } = self.step {
            self.step = WizardStep::CollectingFamilySize;
            self.highlighted = 0;
        }
    }

    /// Select the option at `index` in the current step.
    pub fn select_index(&mut self, index: usize) -> Option<SessionConfig> {
        match self.step {
            WizardStep::CollectingFamilySize => {
                let bucket = FamilyBucket::ALL.get(index).copied()?;
                self.select_family(bucket);
                None
            }
            WizardStep::CollectingChaosLevel { .. } => {
                let level = ChaosLevel::ALL.get(index).copied()?;
                self.select_chaos(level)
            }
        }
    }

    pub fn confirm_highlighted(&mut self) -> Option<SessionConfig> {
        self.select_index(self.highlighted)
    }
}
