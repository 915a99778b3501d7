use std::str::FromStr;

use rand::Rng;

use crate::error::GenError;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alan", "Albert", "Alexander", "Alexis", "Alice", "Amanda", "Amber",
    "Amy", "Andrea", "Andrew", "Angela", "Ann", "Anna", "Anthony", "Arthur", "Ashley", "Austin",
    "Barbara", "Benjamin", "Betty", "Beverly", "Billy", "Bobby", "Brandon", "Brenda", "Brian",
    "Brittany", "Bruce", "Bryan", "Carl", "Carol", "Carolyn", "Catherine", "Charles", "Cheryl",
    "Christian", "Christina", "Christine", "Christopher", "Cynthia", "Daniel", "Danielle", "David",
    "Deborah", "Debra", "Denise", "Dennis", "Diana", "Diane", "Donald", "Donna", "Doris", "Dorothy",
    "Douglas", "Dylan", "Edward", "Elizabeth", "Emily", "Emma", "Eric", "Ethan", "Eugene", "Evelyn",
    "Frances", "Frank", "Gabriel", "Gary", "George", "Gerald", "Gloria", "Grace", "Gregory",
    "Hannah", "Harold", "Heather", "Helen", "Henry", "Jack", "Jacob", "Jacqueline", "James", "Janet",
    "Janice", "Jason", "Jean", "Jeffrey", "Jennifer", "Jeremy", "Jerry", "Jesse", "Jessica", "Joan",
    "Joe", "John", "Johnny", "Jonathan", "Jordan", "Jose", "Joseph", "Joshua", "Joyce", "Juan",
    "Judith", "Judy", "Julia", "Julie", "Justin", "Karen", "Katherine", "Kathleen", "Kathryn",
    "Kayla", "Keith", "Kelly", "Kenneth", "Kevin", "Kimberly", "Kyle", "Larry", "Laura", "Lauren",
    "Lawrence", "Linda", "Lisa", "Logan", "Louis", "Madison", "Margaret", "Maria", "Marie", "Marilyn",
    "Mark", "Martha", "Mary", "Matthew", "Megan", "Melissa", "Michael", "Michelle", "Nancy", "Natalie",
    "Nathan", "Nicholas", "Nicole", "Noah", "Olivia", "Pamela", "Patricia", "Patrick", "Paul",
    "Peter", "Philip", "Rachel", "Ralph", "Randy", "Raymond", "Rebecca", "Richard", "Robert", "Roger",
    "Ronald", "Rose", "Roy", "Russell", "Ruth", "Ryan", "Samantha", "Samuel", "Sandra", "Sara",
    "Sarah", "Scott", "Sean", "Sharon", "Shirley", "Sophia", "Stephanie", "Stephen", "Steven",
    "Susan", "Teresa", "Terry", "Theresa", "Thomas", "Timothy", "Tyler", "Victoria", "Vincent",
    "Virginia", "Walter", "Wayne", "William", "Willie", "Zachary",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Alexander", "Allen", "Alvarez", "Anderson", "Bailey", "Baker", "Barnes", "Bell",
    "Bennett", "Brooks", "Brown", "Bryant", "Butler", "Campbell", "Carter", "Castillo", "Chavez",
    "Clark", "Coleman", "Collins", "Cook", "Cooper", "Cox", "Cruz", "Davis", "Diaz", "Edwards",
    "Evans", "Fisher", "Flores", "Foster", "Garcia", "Gomez", "Gonzales", "Gonzalez", "Graham",
    "Gray", "Green", "Griffin", "Gutierrez", "Hall", "Hamilton", "Harris", "Hayes", "Henderson",
    "Hernandez", "Hill", "Howard", "Hughes", "Jackson", "James", "Jenkins", "Jimenez", "Johnson",
    "Jones", "Jordan", "Kelly", "Kennedy", "Kim", "King", "Lee", "Lewis", "Long", "Lopez", "Martin",
    "Martinez", "Mendoza", "Miller", "Mitchell", "Moore", "Morales", "Morgan", "Morris", "Murphy",
    "Myers", "Nelson", "Nguyen", "Ortiz", "Parker", "Patel", "Patterson", "Perez", "Perry",
    "Peterson", "Phillips", "Powell", "Price", "Ramirez", "Ramos", "Reed", "Reyes", "Richardson",
    "Rivera", "Roberts", "Robinson", "Rodriguez", "Rogers", "Ross", "Ruiz", "Russell", "Sanchez",
    "Sanders", "Scott", "Simmons", "Smith", "Stewart", "Sullivan", "Taylor", "Thomas", "Thompson",
    "Torres", "Turner", "Walker", "Wallace", "Ward", "Washington", "Watson", "West", "White",
    "Williams", "Wilson", "Wood", "Wright", "Young",
];

/// Which bundled reference list to draw names from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    FirstNames,
    LastNames,
}

impl NameKind {
    #[must_use]
    pub fn reference_list(self) -> &'static [&'static str] {
        match self {
            NameKind::FirstNames => FIRST_NAMES,
            NameKind::LastNames => LAST_NAMES,
        }
    }
}

impl FromStr for NameKind {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_names" => Ok(NameKind::FirstNames),
            "last_names" => Ok(NameKind::LastNames),
            other => Err(GenError::InvalidCategory(other.to_owned())),
        }
    }
}

/// Draws `size` names uniformly, with replacement, from the list selected by `kind`.
#[must_use]
pub fn random_names<R: Rng + ?Sized>(
    rng: &mut R,
    kind: NameKind,
    size: usize,
) -> Vec<&'static str> {
    let list = kind.reference_list();
    (0..size).map(|_| list[rng.gen_range(0..list.len())]).collect()
}
