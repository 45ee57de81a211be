//! Hand-authored content catalogs. Generators read these; nothing writes them.

use crate::model::{LocationType, SinLevel};

/// One way a sin can manifest. `description` may use `{town}`, `{authority}`,
/// `{sinner}` and `{victim}` placeholders.
pub struct SinSlotTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

/// A fixed spot in a layout template. Coordinates are baked in; only the name
/// and description are drawn from the variant pools.
pub struct LocationSlot {
    pub key: &'static str,
    pub names: &'static [&'static str],
    pub descriptions: &'static [&'static str],
    pub x: f64,
    pub y: f64,
    /// Keys of other slots in the same template.
    pub connections: &'static [&'static str],
}

/// A town layout. Slots are listed in order of importance, gathering places first.
pub struct LocationTemplate {
    pub name: &'static str,
    pub slots: &'static [LocationSlot],
}

/// A part an NPC plays in a sin.
pub struct RelationshipRole {
    pub role: &'static str,
    pub location: LocationType,
    /// Witnesses talk to strangers; their first fact needs no trust.
    pub witness: bool,
    /// What this role knows. May use `{sin}`, `{sinner}`, `{victim}`, `{authority}`.
    pub fact: &'static str,
}

/// The cast a sin typically involves.
pub struct RelationshipPattern {
    pub name: &'static str,
    pub roles: &'static [RelationshipRole],
}

pub struct ClueTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

/// The set of template tables a generation run draws from.
///
/// The default is the built-in catalog; tests and content authors can swap
/// in their own tables without touching the generators.
#[derive(Clone, Copy)]
pub struct Catalog {
    /// Indexed by [`SinLevel::rank`].
    pub sin_templates: &'static [&'static [SinSlotTemplate]],
    pub location_templates: &'static [LocationTemplate],
    /// Indexed by [`SinLevel::rank`].
    pub relationship_patterns: &'static [&'static [RelationshipPattern]],
}

impl Catalog {
    pub fn sin_templates_for(&self, level: SinLevel) -> &'static [SinSlotTemplate] {
        self.sin_templates.get(level.rank()).copied().unwrap_or_default()
    }

    pub fn relationship_patterns_for(&self, level: SinLevel) -> &'static [RelationshipPattern] {
        self.relationship_patterns
            .get(level.rank())
            .copied()
            .unwrap_or_default()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            sin_templates: &SIN_TEMPLATES,
            location_templates: LOCATION_TEMPLATES,
            relationship_patterns: &RELATIONSHIP_PATTERNS,
        }
    }
}

/// Replace `{key}` placeholders in one pass over `pattern`.
///
/// Substituted values are copied verbatim and never rescanned, so braces in
/// caller data are safe. A placeholder with no value, or an unclosed `{`, is
/// a template bug and panics.
pub fn fill_template(pattern: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            panic!("unresolved placeholder in template: {pattern}");
        };
        let key = &after[..close];
        let Some((_, value)) = values.iter().find(|(name, _)| *name == key) else {
            panic!("unresolved placeholder in template: {pattern}");
        };
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

// -- Sins --

pub const SIN_TEMPLATES: [&[SinSlotTemplate]; 7] = [
    // pride
    &[
        SinSlotTemplate {
            name: "The Steward's Vanity",
            description: "{authority} has begun to take credit for every good harvest in {town}, and no one dares say otherwise.",
        },
        SinSlotTemplate {
            name: "A Proud Heart",
            description: "{sinner} believes the Faith's rules are for lesser folk and has stopped tithing to the branch in {town}.",
        },
        SinSlotTemplate {
            name: "Disdain for Counsel",
            description: "{sinner} refuses to hear correction from {authority}, and others in {town} have started to follow that example.",
        },
    ],
    // injustice
    &[
        SinSlotTemplate {
            name: "Unfair Shares",
            description: "{authority} quietly gave {sinner} the best water rights in {town}, leaving {victim} with a dry field.",
        },
        SinSlotTemplate {
            name: "A Debt Called Early",
            description: "{sinner} called in a debt owed by {victim} the week before harvest, and {authority} let it stand.",
        },
        SinSlotTemplate {
            name: "The Favored Few",
            description: "Charity in {town} goes first to the families who flatter {authority}; {victim} has gone without all winter.",
        },
    ],
    // sin
    &[
        SinSlotTemplate {
            name: "Theft in the Night",
            description: "Someone has been taking from the storehouse of {town}. {victim} was blamed, but {sinner} knows better.",
        },
        SinSlotTemplate {
            name: "A Broken Vow",
            description: "{sinner} has been meeting in secret with a married member of the branch, and {victim} suspects.",
        },
        SinSlotTemplate {
            name: "Violence Behind Closed Doors",
            description: "{victim} has bruises no one in {town} will ask about, and {sinner} smiles at meeting every Sunday.",
        },
    ],
    // demonic attacks
    &[
        SinSlotTemplate {
            name: "Sickness Without Cause",
            description: "A wasting sickness has come to {town}. {victim} was the first to fall ill, and the prayers of {authority} do nothing.",
        },
        SinSlotTemplate {
            name: "Blighted Fields",
            description: "Crops wither overnight in {town} and the livestock will not go near the field {sinner} took from {victim}.",
        },
        SinSlotTemplate {
            name: "Voices in the Dark",
            description: "Children in {town} wake screaming about a man in black who stands at the foot of their beds.",
        },
    ],
    // false doctrine
    &[
        SinSlotTemplate {
            name: "A New Revelation",
            description: "{sinner} preaches that the troubles of {town} are a judgment on {victim}, and the congregation listens.",
        },
        SinSlotTemplate {
            name: "The Steward's Gospel",
            description: "{authority} now teaches that what the steward wants is what the King of Life wants.",
        },
        SinSlotTemplate {
            name: "Heresy at the Hearth",
            description: "Families in {town} gather at {sinner}'s home for a second, secret service with its own scripture.",
        },
    ],
    // sorcery
    &[
        SinSlotTemplate {
            name: "Charms and Hexes",
            description: "{sinner} sells charms that keep the sickness away, for a price paid in more than coin.",
        },
        SinSlotTemplate {
            name: "A Bargain Struck",
            description: "{sinner} made a bargain at the crossroads outside {town}, and {victim} is the one paying for it.",
        },
        SinSlotTemplate {
            name: "The Dead Consulted",
            description: "{authority} has been seen at the cemetery by night, calling names of the dead of {town}.",
        },
    ],
    // hate and murder
    &[
        SinSlotTemplate {
            name: "Blood on the Threshold",
            description: "{victim} is dead, and {sinner} means to see the rest of {victim}'s household follow.",
        },
        SinSlotTemplate {
            name: "A Town Turned Mob",
            description: "{sinner} has stirred {town} to take up arms against {victim}, and {authority} will not stop it.",
        },
        SinSlotTemplate {
            name: "The Killing Hour",
            description: "{sinner} has already killed once to keep the secret of {town}, and will kill the Dogs too if needed.",
        },
    ],
];

pub const CLUE_TEMPLATES: [&[ClueTemplate]; 7] = [
    &[ClueTemplate {
        name: "Engraved Pulpit",
        description: "The pulpit bears a new brass plate with a single name on it.",
    }],
    &[
        ClueTemplate {
            name: "Altered Ledger",
            description: "A ledger page where a debt has been scratched out and rewritten larger.",
        },
        ClueTemplate {
            name: "Diverted Ditch",
            description: "An irrigation ditch dug overnight, turning the creek away from a neighbor's field.",
        },
    ],
    &[
        ClueTemplate {
            name: "Torn Sleeve",
            description: "A scrap of good cloth snagged on the storehouse latch.",
        },
        ClueTemplate {
            name: "Unsent Letter",
            description: "A letter full of promises, signed with initials and never delivered.",
        },
    ],
    &[
        ClueTemplate {
            name: "Dead Birds",
            description: "A ring of dead sparrows around a fence post, untouched by scavengers.",
        },
        ClueTemplate {
            name: "Scorched Hoofprints",
            description: "Hoofprints burned into the grass, leading nowhere.",
        },
    ],
    &[
        ClueTemplate {
            name: "Handwritten Scripture",
            description: "Pages of a book of scripture no one in the Faith would recognize.",
        },
        ClueTemplate {
            name: "Second Hymnal",
            description: "A hymnal with the words changed, hidden under a pew.",
        },
    ],
    &[
        ClueTemplate {
            name: "Bundle of Charms",
            description: "Twigs and hair bound with red thread, still warm to the touch.",
        },
        ClueTemplate {
            name: "Ashes at the Crossroads",
            description: "A circle of ash where no fire was ever built.",
        },
    ],
    &[
        ClueTemplate {
            name: "Bloodied Knife",
            description: "A skinning knife, cleaned badly, wrapped in an apron.",
        },
        ClueTemplate {
            name: "Fresh Grave",
            description: "A grave with no marker, dug too shallow.",
        },
    ],
];

// -- Locations --

pub const LOCATION_TEMPLATES: &[LocationTemplate] = &[
    LocationTemplate {
        name: "main-street",
        slots: &[
            LocationSlot {
                key: "square",
                names: &["Town Square", "Commons Square", "Public Well"],
                descriptions: &[
                    "The dusty heart of town, where folk linger after meeting.",
                    "A packed-earth square ringed by hitching posts.",
                ],
                x: 50.0,
                y: 50.0,
                connections: &["church", "store", "office", "boarding"],
            },
            LocationSlot {
                key: "church",
                names: &["Meetinghouse", "Chapel of the Faithful", "Bishop's Chapel"],
                descriptions: &[
                    "Whitewashed boards and plain benches. The steward keeps it spotless.",
                    "A small house of worship with a bell that rings a little flat.",
                ],
                x: 50.0,
                y: 20.0,
                connections: &["square", "cemetery"],
            },
            LocationSlot {
                key: "store",
                names: &["General Store", "Mercantile", "Trading Post"],
                descriptions: &[
                    "Barrels of flour, bolts of calico, and a ledger behind the counter.",
                    "Shelves half empty since the last wagon train came through.",
                ],
                x: 75.0,
                y: 45.0,
                connections: &["square", "smithy"],
            },
            LocationSlot {
                key: "office",
                names: &["Steward's Office", "Land Office", "Courthouse"],
                descriptions: &[
                    "A narrow room of papers, claims and a locked strongbox.",
                    "Where the town's business is decided, and recorded, or not.",
                ],
                x: 25.0,
                y: 45.0,
                connections: &["square", "homestead-west"],
            },
            LocationSlot {
                key: "boarding",
                names: &["Boarding House", "Livery Stable", "Saloon"],
                descriptions: &[
                    "Travelers and drifters trade news here over thin coffee.",
                    "The smell of hay and horses, and gossip to match.",
                ],
                x: 50.0,
                y: 75.0,
                connections: &["square", "homestead-east"],
            },
            LocationSlot {
                key: "homestead-west",
                names: &["Parker Homestead", "Willow Farm", "Cutler Ranch"],
                descriptions: &[
                    "A sod-roofed home with a garden fighting the dry ground.",
                    "Fences in good repair and a dog that does not bark at strangers.",
                ],
                x: 10.0,
                y: 70.0,
                connections: &["office", "outskirts"],
            },
            LocationSlot {
                key: "smithy",
                names: &["Smithy", "Grist Mill", "Tannery Shop"],
                descriptions: &[
                    "Hot work and a hard-handed proprietor who sees everyone come and go.",
                    "The racket of the place covers any conversation.",
                ],
                x: 90.0,
                y: 65.0,
                connections: &["store", "homestead-east"],
            },
            LocationSlot {
                key: "cemetery",
                names: &["Cemetery", "Old Graveyard", "Cottonwood Grove"],
                descriptions: &[
                    "Weathered markers under a lone cottonwood. Some graves are new.",
                    "Quiet, except for the wind in the dry grass.",
                ],
                x: 80.0,
                y: 15.0,
                connections: &["church"],
            },
            LocationSlot {
                key: "homestead-east",
                names: &["Hollis Farm", "Stone Cabin", "Orchard House"],
                descriptions: &[
                    "A family place gone quiet, curtains drawn at midday.",
                    "Fruit trees planted by someone who meant to stay.",
                ],
                x: 70.0,
                y: 85.0,
                connections: &["boarding", "smithy"],
            },
            LocationSlot {
                key: "outskirts",
                names: &["North Trail", "Ridge Camp", "Dry Creek"],
                descriptions: &[
                    "Where the town gives way to sagebrush and wind.",
                    "Tracks lead out here more often than honest business would explain.",
                ],
                x: 5.0,
                y: 95.0,
                connections: &["homestead-west"],
            },
        ],
    },
    LocationTemplate {
        name: "creek-bend",
        slots: &[
            LocationSlot {
                key: "church",
                names: &["Creekside Chapel", "Stone Meetinghouse"],
                descriptions: &[
                    "Built from river stone by the first settlers, cool even in August.",
                    "The doors stand open; the steward says there is nothing to hide.",
                ],
                x: 30.0,
                y: 30.0,
                connections: &["hall", "mill"],
            },
            LocationSlot {
                key: "hall",
                names: &["Gathering Hall", "Dance Hall"],
                descriptions: &[
                    "Long tables and a fiddle on the wall. Every dispute ends up here.",
                    "The floor is scuffed from celebrations nobody holds anymore.",
                ],
                x: 55.0,
                y: 35.0,
                connections: &["church", "store", "office", "spring"],
            },
            LocationSlot {
                key: "store",
                names: &["Creek Mercantile", "Barter Shop"],
                descriptions: &[
                    "Credit is easy here, and so is owing.",
                    "Everything has a price, written in a hand that changes week to week.",
                ],
                x: 75.0,
                y: 25.0,
                connections: &["hall", "mill"],
            },
            LocationSlot {
                key: "office",
                names: &["Assay Office", "Town Jail"],
                descriptions: &[
                    "Iron bars and a desk with a single drawer that locks.",
                    "Scales, sample bags and a clerk who never looks up.",
                ],
                x: 50.0,
                y: 60.0,
                connections: &["hall", "homestead"],
            },
            LocationSlot {
                key: "mill",
                names: &["Sawmill", "Flour Mill"],
                descriptions: &[
                    "The wheel turns day and night on the creek's current.",
                    "Sawdust and sweat; the miller hears every rumor first.",
                ],
                x: 50.0,
                y: 10.0,
                connections: &["church", "store"],
            },
            LocationSlot {
                key: "homestead",
                names: &["Abbott Homestead", "Cedar Ranch"],
                descriptions: &[
                    "A long walk from town, which suits the family fine.",
                    "Cattle, a windmill and a porch with a good view of the road.",
                ],
                x: 25.0,
                y: 75.0,
                connections: &["office", "outskirts"],
            },
            LocationSlot {
                key: "spring",
                names: &["Bitter Spring", "Painted Rock"],
                descriptions: &[
                    "Water that tastes of iron, and old marks on the stones around it.",
                    "The children are told not to play here. They do anyway.",
                ],
                x: 85.0,
                y: 60.0,
                connections: &["hall"],
            },
            LocationSlot {
                key: "outskirts",
                names: &["Creek Bend Camp", "Old Mine"],
                descriptions: &[
                    "Abandoned tents and a cold fire pit, not so abandoned after all.",
                    "A dark mouth in the hillside, boarded up badly.",
                ],
                x: 10.0,
                y: 95.0,
                connections: &["homestead"],
            },
        ],
    },
    LocationTemplate {
        name: "crossroads",
        slots: &[
            LocationSlot {
                key: "saloon",
                names: &["Crossroads Saloon", "Stage Livery"],
                descriptions: &[
                    "Every road in the territory seems to pass through these doors.",
                    "The stage stops here twice a week, and the gossip never does.",
                ],
                x: 50.0,
                y: 50.0,
                connections: &["church", "store", "office", "homestead"],
            },
            LocationSlot {
                key: "church",
                names: &["Prairie Chapel", "Sod Meetinghouse"],
                descriptions: &[
                    "A humble chapel, its steeple the tallest thing for miles.",
                    "Built of turf and faith, and in need of both.",
                ],
                x: 50.0,
                y: 15.0,
                connections: &["saloon"],
            },
            LocationSlot {
                key: "store",
                names: &["Crossroads Trading Post", "Supply Store"],
                descriptions: &[
                    "Goods from back east, at prices that make folks grumble.",
                    "Sacks of seed and a counter worn smooth by elbows.",
                ],
                x: 85.0,
                y: 50.0,
                connections: &["saloon", "trail"],
            },
            LocationSlot {
                key: "office",
                names: &["Marshal's Office", "Land Claims Office"],
                descriptions: &[
                    "Wanted posters, most of them faded past reading.",
                    "Maps on every wall, with lines that have been redrawn.",
                ],
                x: 15.0,
                y: 50.0,
                connections: &["saloon"],
            },
            LocationSlot {
                key: "homestead",
                names: &["Becker Homestead", "Sod Farm"],
                descriptions: &[
                    "Half dugout, half cabin, entirely stubborn.",
                    "Wheat to the horizon and a family that keeps to itself.",
                ],
                x: 50.0,
                y: 85.0,
                connections: &["saloon"],
            },
            LocationSlot {
                key: "landmark",
                names: &["Lone Oak Grove", "Council Rock"],
                descriptions: &[
                    "Folks come here to make promises they intend to keep.",
                    "Older than the town, and the town knows it.",
                ],
                x: 85.0,
                y: 15.0,
                connections: &["trail"],
            },
            LocationSlot {
                key: "trail",
                names: &["East Trail", "Wagon Ridge"],
                descriptions: &[
                    "Ruts worn deep by wagons heading somewhere better.",
                    "From up here you can see who leaves town, and when.",
                ],
                x: 95.0,
                y: 30.0,
                connections: &["store", "landmark"],
            },
        ],
    },
];

// -- Relationships --

macro_rules! role {
    ($role:expr, $loc:ident, $witness:expr, $fact:expr) => {
        RelationshipRole {
            role: $role,
            location: LocationType::$loc,
            witness: $witness,
            fact: $fact,
        }
    };
}

pub const RELATIONSHIP_PATTERNS: [&[RelationshipPattern]; 7] = [
    // pride
    &[
        RelationshipPattern {
            name: "proud-leader",
            roles: &[
                role!("steward", Church, false, "Since {sin}, I confess I have not listened to anyone but myself."),
                role!("shopkeeper", Store, true, "Everyone knows about {sin}. {authority} acts like the town's own prophet."),
            ],
        },
        RelationshipPattern {
            name: "proud-family",
            roles: &[
                role!("rancher", Homestead, false, "We built this place. {sin} is just folk being jealous of that."),
                role!("neighbor", Homestead, true, "{sinner} won't sit with the rest of us at meeting anymore. That's {sin}, plain."),
                role!("elder", Gathering, false, "I warned them where {sin} would lead."),
            ],
        },
    ],
    // injustice
    &[
        RelationshipPattern {
            name: "unequal-shares",
            roles: &[
                role!("clerk", Office, false, "The records on {sin} were changed. I was told to change them."),
                role!("farmer", Homestead, true, "{victim} got the short end in {sin}, and the steward let it happen."),
            ],
        },
        RelationshipPattern {
            name: "creditor",
            roles: &[
                role!("merchant", Store, false, "A debt is a debt. If {sin} looks harsh, that's the law of trade."),
                role!("widow", Homestead, true, "After {sin}, I have nothing left to feed my children."),
                role!("deputy", Office, false, "I was paid to look the other way during {sin}."),
            ],
        },
    ],
    // sin
    &[
        RelationshipPattern {
            name: "hidden-wrong",
            roles: &[
                role!("hired hand", Outskirts, true, "I saw someone leaving by the back way the night of {sin}."),
                role!("wife", Homestead, false, "If I speak of {sin}, {sinner} will know it was me."),
            ],
        },
        RelationshipPattern {
            name: "secret-affair",
            roles: &[
                role!("schoolteacher", Gathering, true, "The children talk about {sin}. Children see more than we think."),
                role!("husband", Homestead, false, "I know about {sin}. I have known for months."),
            ],
        },
    ],
    // demonic attacks
    &[
        RelationshipPattern {
            name: "afflicted",
            roles: &[
                role!("healer", Store, true, "No herb I know touches this. {sin} is not natural."),
                role!("sick child's mother", Homestead, false, "It started the day after {sin}. Something came into our house."),
            ],
        },
        RelationshipPattern {
            name: "haunted-ground",
            roles: &[
                role!("gravedigger", Landmark, true, "The ground won't stay turned since {sin}. Graves I filled are open by morning."),
                role!("miller", Store, false, "The wheel stopped the night of {sin}. I heard laughing in the race."),
            ],
        },
    ],
    // false doctrine
    &[
        RelationshipPattern {
            name: "false-preacher",
            roles: &[
                role!("lay preacher", Church, false, "What I teach about {sin} came to me in a dream. It is truth."),
                role!("convert", Gathering, true, "I go to the second meeting now. {sin} made more sense than anything the steward says."),
            ],
        },
        RelationshipPattern {
            name: "corrupted-flock",
            roles: &[
                role!("deacon", Church, false, "The steward told us {sin} was revealed. I did not question it."),
                role!("doubter", Outskirts, true, "I walked out when {sin} was preached. Nobody followed me."),
            ],
        },
    ],
    // sorcery
    &[
        RelationshipPattern {
            name: "charm-seller",
            roles: &[
                role!("herbalist", Outskirts, false, "Call {sin} what you like. My charms work."),
                role!("customer", Store, true, "Everyone buys from the herbalist now. Even the steward, since {sin}."),
            ],
        },
        RelationshipPattern {
            name: "crossroads-pact",
            roles: &[
                role!("drifter", Outskirts, true, "I was at the crossroads the night of {sin}. I saw who came."),
                role!("apprentice", Store, false, "I carried the bundle for {sin}. I didn't know what was in it."),
            ],
        },
    ],
    // hate and murder
    &[
        RelationshipPattern {
            name: "killer-and-kin",
            roles: &[
                role!("brother", Homestead, false, "Blood answers blood. {sin} was owed."),
                role!("witness", Gathering, true, "I heard the shot. Everyone did. Nobody speaks of {sin}."),
            ],
        },
        RelationshipPattern {
            name: "mob",
            roles: &[
                role!("ringleader", Gathering, false, "{victim} brought {sin} on themselves. We only finished it."),
                role!("frightened youth", Homestead, true, "They made me stand with them for {sin}. I didn't want to."),
            ],
        },
    ],
];

/// Lawmen appear when a town has law enforcement.
pub const LAW_ROLE: RelationshipRole = RelationshipRole {
    role: "sheriff",
    location: LocationType::Office,
    witness: false,
    fact: "I know more about {sin} than I've put in any report.",
};

// -- Town flavor --

pub const TOWN_PREFIXES: &[&str] = &[
    "Bridal", "Cedar", "Silver", "Hope", "Zion's", "Bitter", "Gilead", "Shiloh", "Red", "Jericho",
];

pub const TOWN_SUFFIXES: &[&str] = &[
    " Falls", " Creek", " Springs", " Ridge", " Crossing", " Hollow", " Bluff", " Wells",
];

pub const TOWN_DESCRIPTIONS: &[&str] = &[
    "{town} sits where the wagon road crosses the creek, a few dozen families holding on against the wind.",
    "{town} was founded by the Faithful ten years back. The orchard is young and so is the grief.",
    "The mines around {town} paid well once. Now the town mostly prays for rain.",
    "{town} looks peaceful from the ridge. The Dogs have learned what that is worth.",
];

pub const ARRIVAL_TEXTS: &[&str] = &[
    "You ride into {town} at dusk. Doors close one by one as your coats are recognized.",
    "A child runs ahead to tell the steward the Dogs have come to {town}.",
    "The road into {town} is lined with fresh graves. Nobody meets your eye.",
];

/// Small talk every NPC will offer a stranger.
pub const GOSSIP_LINES: &[&str] = &[
    "Welcome to {town}. We don't get many riders through.",
    "Weather's been hard on {town} this year.",
    "You'll want to talk to the steward, I expect. Everyone does.",
    "Folks in {town} mind their own business, mostly.",
];

pub const AUTHORITIES: &[&str] = &[
    "Steward Josiah Pratt",
    "Steward Amos Whitlock",
    "Brother Ezra Cole",
    "Sister Hannah Greer",
];

pub const SINNERS: &[&str] = &[
    "Caleb Horne",
    "Levi Sutter",
    "Prudence Ames",
    "Eli Barlow",
    "Mercy Tolliver",
];

pub const VICTIMS: &[&str] = &[
    "Widow Martha Crane",
    "young Samuel Ward",
    "Abigail Foster",
    "Jonah Keel",
    "the Lindqvist family",
];

pub const FIRST_NAMES: &[&str] = &[
    "Abel", "Adah", "Asa", "Bethany", "Clara", "Daniel", "Eliza", "Enoch", "Esther", "Gideon",
    "Hattie", "Isaac", "Jedediah", "Keziah", "Lydia", "Micah", "Naomi", "Obadiah", "Patience",
    "Reuben", "Ruth", "Silas", "Tabitha", "Zeke",
];

pub const SURNAMES: &[&str] = &[
    "Abbott", "Bingham", "Calloway", "Dunning", "Eckert", "Farrow", "Gale", "Harlan", "Isbell",
    "Judd", "Kimball", "Lowry", "Mabry", "Noble", "Orcutt", "Pruitt", "Quarles", "Rowe",
];
