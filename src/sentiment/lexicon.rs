//! Static sentiment lexicon
//!
//! An AFINN-style table mapping English words to hand-assigned integer
//! weights in [-5, 5]. The table is immutable, constructed once at startup
//! and passed explicitly to the scoring functions; there is no hidden
//! process-wide analyzer instance.
//!
//! Weights are normalized to [-1, 1] at lookup time by dividing by
//! [`MAX_WEIGHT`], so every score produced downstream is a normalized float.

use std::collections::HashMap;

/// Largest absolute raw weight in an AFINN-style table
pub const MAX_WEIGHT: f64 = 5.0;

/// Curated AFINN-style entries: (word, raw weight in [-5, 5])
const AFINN_ENTRIES: &[(&str, i8)] = &[
    ("abandon", -2),
    ("abuse", -3),
    ("accomplish", 2),
    ("achieve", 2),
    ("admire", 3),
    ("adopt", 1),
    ("advance", 2),
    ("adverse", -2),
    ("affected", -1),
    ("afraid", -2),
    ("aggressive", -2),
    ("agree", 1),
    ("alarming", -2),
    ("alert", -1),
    ("amazing", 4),
    ("ambitious", 2),
    ("anger", -3),
    ("angry", -3),
    ("anxious", -2),
    ("apologize", -1),
    ("applaud", 2),
    ("appreciate", 2),
    ("approve", 2),
    ("arrest", -2),
    ("attack", -1),
    ("attract", 1),
    ("avert", -1),
    ("award", 3),
    ("awesome", 4),
    ("awful", -3),
    ("backing", 1),
    ("bad", -3),
    ("bailout", -2),
    ("ban", -2),
    ("bankrupt", -3),
    ("bankruptcy", -3),
    ("battle", -1),
    ("beautiful", 3),
    ("benefit", 2),
    ("best", 3),
    ("betray", -3),
    ("blame", -2),
    ("block", -1),
    ("bloom", 2),
    ("blunder", -2),
    ("boom", 2),
    ("boost", 2),
    ("boycott", -2),
    ("brave", 2),
    ("breach", -2),
    ("breakthrough", 3),
    ("bribe", -3),
    ("bright", 1),
    ("brilliant", 4),
    ("broke", -2),
    ("broken", -1),
    ("bullish", 2),
    ("burden", -2),
    ("calm", 2),
    ("cancel", -1),
    ("capable", 1),
    ("careless", -2),
    ("casualty", -2),
    ("catastrophe", -3),
    ("catastrophic", -4),
    ("celebrate", 3),
    ("censor", -2),
    ("champion", 3),
    ("chaos", -2),
    ("chaotic", -2),
    ("charge", -3),
    ("cheat", -3),
    ("cheer", 2),
    ("clash", -2),
    ("clean", 2),
    ("clever", 2),
    ("collapse", -2),
    ("collide", -1),
    ("comfort", 2),
    ("commit", 1),
    ("competent", 2),
    ("competitive", 2),
    ("concern", -2),
    ("concerned", -2),
    ("condemn", -2),
    ("confident", 2),
    ("conflict", -2),
    ("confusion", -2),
    ("congrats", 2),
    ("congratulations", 2),
    ("controversial", -2),
    ("controversy", -2),
    ("corrupt", -3),
    ("corruption", -3),
    ("courage", 2),
    ("crash", -2),
    ("creative", 2),
    ("crime", -2),
    ("criminal", -3),
    ("crisis", -3),
    ("critical", -2),
    ("criticize", -2),
    ("cruel", -3),
    ("curious", 1),
    ("cut", -1),
    ("cutting", -1),
    ("damage", -3),
    ("danger", -2),
    ("dangerous", -2),
    ("dead", -3),
    ("deadlock", -2),
    ("deadly", -3),
    ("death", -2),
    ("debt", -2),
    ("decline", -2),
    ("defeat", -2),
    ("defect", -3),
    ("deficit", -2),
    ("delay", -1),
    ("delight", 3),
    ("delighted", 3),
    ("demand", -1),
    ("deny", -2),
    ("depressed", -2),
    ("derail", -2),
    ("despair", -3),
    ("destroy", -3),
    ("destruction", -3),
    ("devastate", -2),
    ("devastating", -2),
    ("difficult", -1),
    ("dilemma", -1),
    ("dirty", -2),
    ("disappoint", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disaster", -2),
    ("disastrous", -3),
    ("discontent", -2),
    ("dismal", -2),
    ("dismiss", -2),
    ("dispute", -2),
    ("disrupt", -2),
    ("disruption", -2),
    ("distrust", -3),
    ("doom", -2),
    ("doubt", -1),
    ("downgrade", -3),
    ("downturn", -2),
    ("dread", -2),
    ("drop", -1),
    ("drought", -2),
    ("dump", -1),
    ("eager", 2),
    ("earnings", 2),
    ("easy", 1),
    ("effective", 2),
    ("efficient", 2),
    ("elegant", 2),
    ("embrace", 1),
    ("emergency", -2),
    ("empower", 2),
    ("encourage", 2),
    ("endorse", 2),
    ("energetic", 2),
    ("engage", 1),
    ("enjoy", 2),
    ("erode", -1),
    ("error", -2),
    ("escalate", -2),
    ("evacuate", -1),
    ("evil", -3),
    ("exaggerate", -2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("exclusive", 2),
    ("expand", 1),
    ("explode", -1),
    ("explosion", -1),
    ("expose", -1),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fake", -3),
    ("fall", -1),
    ("famous", 2),
    ("fantastic", 4),
    ("fatal", -3),
    ("fatality", -3),
    ("favorable", 2),
    ("favorite", 2),
    ("fear", -2),
    ("fearful", -2),
    ("fine", 2),
    ("fire", -2),
    ("fired", -2),
    ("flawless", 2),
    ("flood", -1),
    ("flourish", 3),
    ("forced", -1),
    ("fraud", -4),
    ("fraudulent", -4),
    ("free", 1),
    ("fresh", 1),
    ("frustrated", -2),
    ("fun", 4),
    ("gain", 2),
    ("gains", 2),
    ("generous", 2),
    ("gentle", 3),
    ("glad", 3),
    ("gloom", -2),
    ("gloomy", -2),
    ("glory", 2),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("greed", -3),
    ("greedy", -2),
    ("grief", -2),
    ("grim", -2),
    ("grow", 1),
    ("growing", 1),
    ("growth", 2),
    ("guilty", -3),
    ("halt", -2),
    ("happy", 3),
    ("harm", -2),
    ("harmful", -2),
    ("hate", -3),
    ("havoc", -2),
    ("hazard", -3),
    ("hazardous", -3),
    ("healthy", 2),
    ("help", 2),
    ("helpful", 2),
    ("hero", 2),
    ("hinder", -2),
    ("honest", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("hopeless", -2),
    ("horrible", -3),
    ("horrific", -3),
    ("hostile", -2),
    ("hurt", -2),
    ("illegal", -3),
    ("impress", 3),
    ("impressive", 3),
    ("improve", 2),
    ("improvement", 2),
    ("incompetent", -2),
    ("increase", 1),
    ("indict", -2),
    ("inflation", -2),
    ("injure", -2),
    ("injured", -2),
    ("innovate", 1),
    ("innovative", 2),
    ("insecure", -2),
    ("inspire", 2),
    ("inspiring", 2),
    ("instability", -2),
    ("intact", 2),
    ("interesting", 2),
    ("invest", 1),
    ("jeopardy", -2),
    ("jobless", -2),
    ("joy", 3),
    ("jubilant", 3),
    ("kill", -3),
    ("killed", -3),
    ("kind", 2),
    ("landmark", 2),
    ("launch", 1),
    ("lawsuit", -2),
    ("layoff", -2),
    ("layoffs", -2),
    ("lead", 1),
    ("leak", -1),
    ("litigation", -1),
    ("lose", -3),
    ("loss", -3),
    ("losses", -3),
    ("lost", -3),
    ("love", 3),
    ("loyal", 3),
    ("lucky", 3),
    ("mediocre", -2),
    ("melancholy", -2),
    ("menace", -2),
    ("mess", -2),
    ("milestone", 2),
    ("miracle", 4),
    ("miserable", -3),
    ("misery", -2),
    ("mislead", -3),
    ("misleading", -3),
    ("mistake", -2),
    ("momentum", 1),
    ("motivate", 1),
    ("murder", -2),
    ("negative", -2),
    ("neglect", -2),
    ("nervous", -2),
    ("nice", 3),
    ("noble", 2),
    ("notorious", -2),
    ("opportunity", 2),
    ("optimism", 2),
    ("optimistic", 2),
    ("outage", -2),
    ("outbreak", -2),
    ("outcry", -2),
    ("outperform", 2),
    ("outrage", -3),
    ("outstanding", 5),
    ("overload", -1),
    ("overlook", -1),
    ("panic", -3),
    ("peace", 2),
    ("peaceful", 2),
    ("penalty", -2),
    ("perfect", 3),
    ("peril", -2),
    ("pessimism", -2),
    ("pessimistic", -2),
    ("plague", -3),
    ("pleasant", 3),
    ("please", 1),
    ("pleased", 3),
    ("plummet", -3),
    ("plunge", -2),
    ("poison", -2),
    ("pollute", -2),
    ("pollution", -2),
    ("poor", -2),
    ("popular", 3),
    ("positive", 2),
    ("postpone", -1),
    ("poverty", -1),
    ("praise", 3),
    ("pressure", -1),
    ("pretty", 1),
    ("prevent", -1),
    ("problem", -2),
    ("problems", -2),
    ("profit", 2),
    ("profitable", 2),
    ("progress", 2),
    ("promise", 1),
    ("promising", 2),
    ("promote", 1),
    ("prosecute", -2),
    ("prosper", 2),
    ("prosperity", 3),
    ("protect", 1),
    ("protest", -2),
    ("proud", 2),
    ("punish", -2),
    ("quit", -1),
    ("rally", 2),
    ("ravage", -2),
    ("rebound", 2),
    ("recession", -2),
    ("reckless", -2),
    ("recover", 2),
    ("recovery", 2),
    ("refuse", -2),
    ("regret", -2),
    ("reject", -1),
    ("rejoice", 4),
    ("relief", 1),
    ("relieved", 2),
    ("remarkable", 2),
    ("rescue", 2),
    ("resign", -1),
    ("resolve", 2),
    ("restore", 1),
    ("restrict", -2),
    ("revive", 2),
    ("reward", 2),
    ("rig", -1),
    ("riot", -2),
    ("rise", 1),
    ("risk", -2),
    ("risky", -2),
    ("robust", 2),
    ("ruin", -2),
    ("sabotage", -2),
    ("sad", -2),
    ("safe", 1),
    ("safety", 1),
    ("sanction", -2),
    ("satisfied", 2),
    ("save", 2),
    ("scam", -2),
    ("scandal", -3),
    ("scandalous", -3),
    ("scare", -2),
    ("secure", 2),
    ("seize", -1),
    ("setback", -2),
    ("severe", -2),
    ("shaky", -2),
    ("share", 1),
    ("shine", 2),
    ("shock", -2),
    ("shortage", -2),
    ("shutdown", -2),
    ("significant", 1),
    ("slam", -2),
    ("slash", -2),
    ("slump", -2),
    ("smart", 1),
    ("smile", 2),
    ("solid", 2),
    ("solution", 1),
    ("solve", 1),
    ("sorrow", -2),
    ("sorry", -1),
    ("stable", 2),
    ("stagnant", -2),
    ("steady", 2),
    ("steal", -2),
    ("stolen", -2),
    ("stop", -1),
    ("strength", 2),
    ("stress", -1),
    ("strike", -1),
    ("strong", 2),
    ("struggle", -2),
    ("stuck", -2),
    ("succeed", 3),
    ("success", 2),
    ("successful", 3),
    ("sue", -2),
    ("suffer", -2),
    ("suffering", -2),
    ("super", 3),
    ("superb", 5),
    ("superior", 2),
    ("support", 2),
    ("surge", 2),
    ("survive", 2),
    ("suspect", -1),
    ("suspend", -1),
    ("sustainable", 2),
    ("terrible", -3),
    ("terror", -3),
    ("terrorism", -3),
    ("thank", 2),
    ("thankful", 2),
    ("threat", -2),
    ("threaten", -2),
    ("thrive", 2),
    ("tough", -2),
    ("toxic", -3),
    ("tragedy", -2),
    ("tragic", -2),
    ("trouble", -2),
    ("troubled", -2),
    ("trust", 1),
    ("turmoil", -2),
    ("unacceptable", -2),
    ("uncertain", -1),
    ("uncertainty", -1),
    ("unemployment", -2),
    ("unfair", -2),
    ("unhappy", -2),
    ("unprecedented", 1),
    ("unrest", -2),
    ("unsafe", -2),
    ("unstable", -2),
    ("upbeat", 2),
    ("upgrade", 2),
    ("uplift", 2),
    ("urgent", -1),
    ("useful", 2),
    ("useless", -2),
    ("victory", 3),
    ("vigilant", 2),
    ("vindicate", 2),
    ("violate", -2),
    ("violation", -2),
    ("violence", -3),
    ("violent", -3),
    ("vital", 1),
    ("vulnerable", -2),
    ("war", -2),
    ("warm", 1),
    ("warn", -2),
    ("warning", -3),
    ("waste", -1),
    ("weak", -2),
    ("weakness", -2),
    ("wealth", 3),
    ("wealthy", 2),
    ("welcome", 2),
    ("win", 4),
    ("winner", 4),
    ("winning", 4),
    ("wonderful", 4),
    ("worry", -3),
    ("worrying", -3),
    ("worse", -3),
    ("worsen", -3),
    ("worst", -3),
    ("worth", 2),
    ("worthless", -2),
    ("wreck", -2),
    ("wrong", -2),
];

/// Immutable word-to-weight sentiment table
///
/// Construct once (typically via [`Lexicon::afinn`]) and share by reference
/// or `Arc`; lookups never mutate the table.
#[derive(Debug, Clone)]
pub struct Lexicon {
    weights: HashMap<&'static str, i8>,
}

impl Lexicon {
    /// Build the built-in AFINN-style lexicon
    pub fn afinn() -> Self {
        Self::from_entries(AFINN_ENTRIES)
    }

    /// Build a lexicon from explicit entries (mainly for tests)
    pub fn from_entries(entries: &[(&'static str, i8)]) -> Self {
        Self {
            weights: entries.iter().copied().collect(),
        }
    }

    /// Normalized weight for a token, `None` when the token is not in the
    /// table. Matched weights are in [-1, 1].
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.weights.get(token).map(|w| f64::from(*w) / MAX_WEIGHT)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
