//! The fixed table of civics questions and lookups over it.

use crate::error::{CoreError, Result};
use crate::types::{Category, Question, Subcategory as S};
use rand::seq::SliceRandom;
use rand::Rng;

/// Placeholder answer for questions whose answer depends on where or when the test is taken.
pub const VARIES_ANSWER: &str = "Answers will vary.";

const VARIES: &[&str] = &[VARIES_ANSWER];

const fn q(
    id: u32,
    prompt: &'static str,
    answers: &'static [&'static str],
    subcategory: S,
    elderly_only: bool,
) -> Question {
    Question {
        id,
        prompt,
        answers,
        category: subcategory.category(),
        subcategory,
        elderly_only,
    }
}

/// The 100 civics questions of the naturalization test.
pub static QUESTIONS: [Question; 100] = [
    q(1, "What is the supreme law of the land?", &["the Constitution"], S::PrinciplesOfAmericanDemocracy, false),
    q(2, "What does the Constitution do?", &["sets up the government", "defines the government", "protects basic rights of Americans"], S::PrinciplesOfAmericanDemocracy, false),
    q(3, "The idea of self-government is in the first three words of the Constitution. What are these words?", &["We the People"], S::PrinciplesOfAmericanDemocracy, false),
    q(4, "What is an amendment?", &["a change (to the Constitution)", "an addition (to the Constitution)"], S::PrinciplesOfAmericanDemocracy, false),
    q(5, "What do we call the first ten amendments to the Constitution?", &["the Bill of Rights"], S::PrinciplesOfAmericanDemocracy, false),
    q(6, "What is one right or freedom from the First Amendment?", &["speech", "religion", "assembly", "press", "petition the government"], S::PrinciplesOfAmericanDemocracy, true),
    q(7, "How many amendments does the Constitution have?", &["twenty-seven (27)"], S::PrinciplesOfAmericanDemocracy, false),
    q(8, "What did the Declaration of Independence do?", &["announced our independence (from Great Britain)", "declared our independence (from Great Britain)", "said that the United States is free (from Great Britain)"], S::PrinciplesOfAmericanDemocracy, false),
    q(9, "What are two rights in the Declaration of Independence?", &["life", "liberty", "pursuit of happiness"], S::PrinciplesOfAmericanDemocracy, false),
    q(10, "What is freedom of religion?", &["You can practice any religion, or not practice a religion."], S::PrinciplesOfAmericanDemocracy, false),
    q(11, "What is the economic system in the United States?", &["capitalist economy", "market economy"], S::PrinciplesOfAmericanDemocracy, true),
    q(12, "What is the \"rule of law\"?", &["Everyone must follow the law.", "Leaders must obey the law.", "Government must obey the law.", "No one is above the law."], S::PrinciplesOfAmericanDemocracy, false),
    q(13, "Name one branch or part of the government.", &["Congress", "legislative", "President", "executive", "the courts", "judicial"], S::SystemOfGovernment, true),
    q(14, "What stops one branch of government from becoming too powerful?", &["checks and balances", "separation of powers"], S::SystemOfGovernment, false),
    q(15, "Who is in charge of the executive branch?", &["the President"], S::SystemOfGovernment, false),
    q(16, "Who makes federal laws?", &["Congress", "Senate and House (of Representatives)", "(U.S. or national) legislature"], S::SystemOfGovernment, false),
    q(17, "What are the two parts of the U.S. Congress?", &["the Senate and House (of Representatives)"], S::SystemOfGovernment, false),
    q(18, "How many U.S. Senators are there?", &["one hundred (100)"], S::SystemOfGovernment, true),
    q(19, "We elect a U.S. Senator for how many years?", &["six (6)"], S::SystemOfGovernment, false),
    q(20, "Who is one of your state's U.S. Senators now?", VARIES, S::SystemOfGovernment, true),
    q(21, "The House of Representatives has how many voting members?", &["four hundred thirty-five (435)"], S::SystemOfGovernment, false),
    q(22, "We elect a U.S. Representative for how many years?", &["two (2)"], S::SystemOfGovernment, false),
    q(23, "Name your U.S. Representative.", VARIES, S::SystemOfGovernment, false),
    q(24, "Who does a U.S. Senator represent?", &["all people of the state"], S::SystemOfGovernment, false),
    q(25, "Why do some states have more Representatives than other states?", &["(because of) the state's population", "(because) they have more people", "(because) some states have more people"], S::SystemOfGovernment, false),
    q(26, "We elect a President for how many years?", &["four (4)"], S::SystemOfGovernment, false),
    q(27, "In what month do we vote for President?", &["November"], S::SystemOfGovernment, true),
    q(28, "What is the name of the President of the United States now?", VARIES, S::SystemOfGovernment, true),
    q(29, "What is the name of the Vice President of the United States now?", VARIES, S::SystemOfGovernment, false),
    q(30, "If the President can no longer serve, who becomes President?", &["the Vice President"], S::SystemOfGovernment, false),
    q(31, "If both the President and the Vice President can no longer serve, who becomes President?", &["the Speaker of the House"], S::SystemOfGovernment, false),
    q(32, "Who is the Commander in Chief of the military?", &["the President"], S::SystemOfGovernment, false),
    q(33, "Who signs bills to become laws?", &["the President"], S::SystemOfGovernment, false),
    q(34, "Who vetoes bills?", &["the President"], S::SystemOfGovernment, false),
    q(35, "What does the President's Cabinet do?", &["advises the President"], S::SystemOfGovernment, false),
    q(36, "What are two Cabinet-level positions?", &["Secretary of Agriculture", "Secretary of Commerce", "Secretary of Defense", "Secretary of Education", "Secretary of Energy", "Secretary of Health and Human Services", "Secretary of Homeland Security", "Secretary of Housing and Urban Development", "Secretary of the Interior", "Secretary of Labor", "Secretary of State", "Secretary of Transportation", "Secretary of the Treasury", "Secretary of Veterans Affairs", "Attorney General", "Vice President"], S::SystemOfGovernment, false),
    q(37, "What does the judicial branch do?", &["reviews laws", "explains laws", "resolves disputes (disagreements)", "decides if a law goes against the Constitution"], S::SystemOfGovernment, false),
    q(38, "What is the highest court in the United States?", &["the Supreme Court"], S::SystemOfGovernment, false),
    q(39, "How many justices are on the Supreme Court?", &["nine (9)"], S::SystemOfGovernment, false),
    q(40, "Who is the Chief Justice of the United States now?", VARIES, S::SystemOfGovernment, false),
    q(41, "Under our Constitution, some powers belong to the federal government. What is one power of the federal government?", &["to print money", "to declare war", "to create an army", "to make treaties"], S::SystemOfGovernment, false),
    q(42, "Under our Constitution, some powers belong to the states. What is one power of the states?", &["provide schooling and education", "provide protection (police)", "provide safety (fire departments)", "give a driver's license", "approve zoning and land use"], S::SystemOfGovernment, false),
    q(43, "Who is the Governor of your state now?", VARIES, S::SystemOfGovernment, false),
    q(44, "What is the capital of your state?", VARIES, S::SystemOfGovernment, true),
    q(45, "What are the two major political parties in the United States?", &["Democratic and Republican"], S::SystemOfGovernment, true),
    q(46, "What is the political party of the President now?", VARIES, S::SystemOfGovernment, false),
    q(47, "What is the name of the Speaker of the House of Representatives now?", VARIES, S::SystemOfGovernment, false),
    q(48, "There are four amendments to the Constitution about who can vote. Describe one of them.", &["Citizens eighteen (18) and older (can vote).", "You don't have to pay (a poll tax) to vote.", "Any citizen can vote. (Women and men can vote.)", "A male citizen of any race (can vote)."], S::RightsAndResponsibilities, false),
    q(49, "What is one responsibility that is only for United States citizens?", &["serve on a jury", "vote in a federal election"], S::RightsAndResponsibilities, true),
    q(50, "Name one right only for United States citizens.", &["vote in a federal election", "run for federal office"], S::RightsAndResponsibilities, false),
    q(51, "What are two rights of everyone living in the United States?", &["freedom of expression", "freedom of speech", "freedom of assembly", "freedom to petition the government", "freedom of religion", "the right to bear arms"], S::RightsAndResponsibilities, false),
    q(52, "What do we show loyalty to when we say the Pledge of Allegiance?", &["the United States", "the flag"], S::RightsAndResponsibilities, false),
    q(53, "What is one promise you make when you become a United States citizen?", &["give up loyalty to other countries", "defend the Constitution and laws of the United States", "obey the laws of the United States", "serve in the U.S. military (if needed)", "serve (do important work for) the nation (if needed)", "be loyal to the United States"], S::RightsAndResponsibilities, false),
    q(54, "How old do citizens have to be to vote for President?", &["eighteen (18) and older"], S::RightsAndResponsibilities, true),
    q(55, "What are two ways that Americans can participate in their democracy?", &["vote", "join a political party", "help with a campaign", "join a civic group", "join a community group", "give an elected official your opinion on an issue", "call Senators and Representatives", "publicly support or oppose an issue or policy", "run for office", "write to a newspaper"], S::RightsAndResponsibilities, true),
    q(56, "When is the last day you can send in federal income tax forms?", &["April 15"], S::RightsAndResponsibilities, false),
    q(57, "When must all men register for the Selective Service?", &["at age eighteen (18)", "between eighteen (18) and twenty-six (26)"], S::RightsAndResponsibilities, false),
    q(58, "What is one reason colonists came to America?", &["freedom", "political liberty", "religious freedom", "economic opportunity", "practice their religion", "escape persecution"], S::ColonialPeriodAndIndependence, false),
    q(59, "Who lived in America before the Europeans arrived?", &["American Indians", "Native Americans"], S::ColonialPeriodAndIndependence, false),
    q(60, "What group of people was taken to America and sold as slaves?", &["Africans", "people from Africa"], S::ColonialPeriodAndIndependence, false),
    q(61, "Why did the colonists fight the British?", &["because of high taxes (taxation without representation)", "because the British army stayed in their houses (boarding, quartering)", "because they didn't have self-government"], S::ColonialPeriodAndIndependence, false),
    q(62, "Who wrote the Declaration of Independence?", &["(Thomas) Jefferson"], S::ColonialPeriodAndIndependence, false),
    q(63, "When was the Declaration of Independence adopted?", &["July 4, 1776"], S::ColonialPeriodAndIndependence, false),
    q(64, "There were 13 original states. Name three.", &["New Hampshire", "Massachusetts", "Rhode Island", "Connecticut", "New York", "New Jersey", "Pennsylvania", "Delaware", "Maryland", "Virginia", "North Carolina", "South Carolina", "Georgia"], S::ColonialPeriodAndIndependence, false),
    q(65, "What happened at the Constitutional Convention?", &["The Constitution was written.", "The Founding Fathers wrote the Constitution."], S::ColonialPeriodAndIndependence, false),
    q(66, "When was the Constitution written?", &["1787"], S::ColonialPeriodAndIndependence, false),
    q(67, "The Federalist Papers supported the passage of the U.S. Constitution. Name one of the writers.", &["(James) Madison", "(Alexander) Hamilton", "(John) Jay", "Publius"], S::ColonialPeriodAndIndependence, false),
    q(68, "What is one thing Benjamin Franklin is famous for?", &["U.S. diplomat", "oldest member of the Constitutional Convention", "first Postmaster General of the United States", "writer of \"Poor Richard's Almanac\"", "started the first free libraries"], S::ColonialPeriodAndIndependence, false),
    q(69, "Who is the \"Father of Our Country\"?", &["(George) Washington"], S::ColonialPeriodAndIndependence, false),
    q(70, "Who was the first President?", &["(George) Washington"], S::ColonialPeriodAndIndependence, true),
    q(71, "What territory did the United States buy from France in 1803?", &["the Louisiana Territory", "Louisiana"], S::The1800s, false),
    q(72, "Name one war fought by the United States in the 1800s.", &["War of 1812", "Mexican-American War", "Civil War", "Spanish-American War"], S::The1800s, false),
    q(73, "Name the U.S. war between the North and the South.", &["the Civil War", "the War between the States"], S::The1800s, false),
    q(74, "Name one problem that led to the Civil War.", &["slavery", "economic reasons", "states' rights"], S::The1800s, false),
    q(75, "What was one important thing that Abraham Lincoln did?", &["freed the slaves (Emancipation Proclamation)", "saved (or preserved) the Union", "led the United States during the Civil War"], S::The1800s, true),
    q(76, "What did the Emancipation Proclamation do?", &["freed the slaves", "freed slaves in the Confederacy", "freed slaves in the Confederate states", "freed slaves in most Southern states"], S::The1800s, false),
    q(77, "What did Susan B. Anthony do?", &["fought for women's rights", "fought for civil rights"], S::The1800s, false),
    q(78, "Name one war fought by the United States in the 1900s.", &["World War I", "World War II", "Korean War", "Vietnam War", "(Persian) Gulf War"], S::RecentAmericanHistory, true),
    q(79, "Who was President during World War I?", &["(Woodrow) Wilson"], S::RecentAmericanHistory, false),
    q(80, "Who was President during the Great Depression and World War II?", &["(Franklin) Roosevelt"], S::RecentAmericanHistory, false),
    q(81, "Who did the United States fight in World War II?", &["Japan, Germany, and Italy"], S::RecentAmericanHistory, false),
    q(82, "Before he was President, Eisenhower was a general. What war was he in?", &["World War II"], S::RecentAmericanHistory, false),
    q(83, "During the Cold War, what was the main concern of the United States?", &["Communism"], S::RecentAmericanHistory, false),
    q(84, "What movement tried to end racial discrimination?", &["civil rights (movement)"], S::RecentAmericanHistory, false),
    q(85, "What did Martin Luther King, Jr. do?", &["fought for civil rights", "worked for equality for all Americans"], S::RecentAmericanHistory, false),
    q(86, "What major event happened on September 11, 2001, in the United States?", &["Terrorists attacked the United States."], S::RecentAmericanHistory, false),
    q(87, "Name one American Indian tribe in the United States.", &["Cherokee", "Navajo", "Sioux", "Chippewa", "Choctaw", "Pueblo", "Apache", "Iroquois", "Creek", "Blackfeet", "Seminole", "Cheyenne", "Arawak", "Shawnee", "Mohegan", "Huron", "Oneida", "Lakota", "Crow", "Teton", "Hopi", "Inuit"], S::RecentAmericanHistory, true),
    q(88, "Name one of the two longest rivers in the United States.", &["Missouri (River)", "Mississippi (River)"], S::Geography, false),
    q(89, "What ocean is on the West Coast of the United States?", &["Pacific (Ocean)"], S::Geography, false),
    q(90, "What ocean is on the East Coast of the United States?", &["Atlantic (Ocean)"], S::Geography, false),
    q(91, "Name one U.S. territory.", &["Puerto Rico", "U.S. Virgin Islands", "American Samoa", "Northern Mariana Islands", "Guam"], S::Geography, false),
    q(92, "Name one state that borders Canada.", &["Maine", "New Hampshire", "Vermont", "New York", "Pennsylvania", "Ohio", "Michigan", "Minnesota", "North Dakota", "Montana", "Idaho", "Washington", "Alaska"], S::Geography, false),
    q(93, "Name one state that borders Mexico.", &["California", "Arizona", "New Mexico", "Texas"], S::Geography, false),
    q(94, "What is the capital of the United States?", &["Washington, D.C."], S::Geography, true),
    q(95, "Where is the Statue of Liberty?", &["New York (Harbor)", "Liberty Island", "New Jersey", "near New York City", "on the Hudson (River)"], S::Geography, true),
    q(96, "Why does the flag have 13 stripes?", &["because there were 13 original colonies", "because the stripes represent the original colonies"], S::Symbols, false),
    q(97, "Why does the flag have 50 stars?", &["because there is one star for each state", "because each star represents a state", "because there are 50 states"], S::Symbols, true),
    q(98, "What is the name of the national anthem?", &["The Star-Spangled Banner"], S::Symbols, false),
    q(99, "When do we celebrate Independence Day?", &["July 4"], S::Holidays, true),
    q(100, "Name two national U.S. holidays.", &["New Year's Day", "Martin Luther King, Jr. Day", "Presidents' Day", "Memorial Day", "Independence Day", "Labor Day", "Columbus Day", "Veterans Day", "Thanksgiving", "Christmas"], S::Holidays, false),
];

/// Filter over the catalog used by the flash card deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Categories to keep. Empty keeps every category.
    pub categories: Vec<Category>,
    /// Keep only the reduced 65+ question set.
    pub elderly_only: bool,
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        (self.categories.is_empty() || self.categories.contains(&question.category))
            && (!self.elderly_only || question.elderly_only)
    }
}

/// Read-only view over a static question table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    questions: &'static [Question],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The full 100-question catalog.
    pub fn standard() -> Self {
        Self {
            questions: &QUESTIONS,
        }
    }

    /// Catalog over a custom table.
    pub fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn all(&self) -> &'static [Question] {
        self.questions
    }

    /// Look up a question by id.
    pub fn get(&self, id: u32) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Look up a question by id, failing for ids outside the table.
    pub fn require(&self, id: u32) -> Result<&'static Question> {
        self.get(id).ok_or(CoreError::UnknownQuestion(id))
    }

    pub fn by_category(&self, category: Category) -> Vec<&'static Question> {
        self.questions.iter().filter(|q| q.category == category).collect()
    }

    pub fn by_subcategory(&self, subcategory: S) -> Vec<&'static Question> {
        self.questions
            .iter()
            .filter(|q| q.subcategory == subcategory)
            .collect()
    }

    /// Questions for applicants 65+ with 20+ years as permanent residents.
    pub fn elderly_only(&self) -> Vec<&'static Question> {
        self.questions.iter().filter(|q| q.elderly_only).collect()
    }

    pub fn filtered(&self, filter: &QuestionFilter) -> Vec<&'static Question> {
        self.questions.iter().filter(|q| filter.matches(q)).collect()
    }

    /// Number of questions in a category.
    pub fn category_size(&self, category: Category) -> usize {
        self.questions.iter().filter(|q| q.category == category).count()
    }

    /// Questions with a fixed answer that can be checked in a quiz.
    pub fn quizzable(&self) -> Vec<&'static Question> {
        self.questions
            .iter()
            .filter(|q| !q.is_time_sensitive())
            .collect()
    }

    /// Random selection of up to `count` distinct quizzable questions.
    pub fn random<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&'static Question> {
        let mut shuffled = self.quizzable();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        shuffled
    }
}
