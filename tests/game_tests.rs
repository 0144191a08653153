use wordpool::{load_dictionary, Dictionary, GameSession, LetterPool, QUIT_COMMAND};

fn sample_session() -> GameSession {
    let pool = LetterPool::from_letters("eatpotato").unwrap();
    let dictionary = Dictionary::from_words(["pot", "toad", "tap", "potato"]).unwrap();
    GameSession::new(pool, dictionary)
}

#[test]
fn test_accepted_word_scores_its_length() {
    let mut session = sample_session();

    assert_eq!(session.submit_word("pot"), 3);
    assert_eq!(session.standings().len(), 1);
    assert_eq!(session.standings()[0].word, "pot");
    assert_eq!(session.standings()[0].score, 3);
}

#[test]
fn test_rejected_word_scores_zero_and_leaves_table_alone() {
    let mut session = sample_session();
    session.submit_word("pot");

    assert_eq!(session.submit_word("zzz"), 0);
    assert_eq!(session.standings().len(), 1);
}

#[test]
fn test_empty_submission_scores_zero() {
    let mut session = sample_session();

    assert_eq!(session.submit_word(""), 0);
    assert!(session.standings().is_empty());
}

#[test]
fn test_resubmitted_word_scores_zero_and_keeps_first_entry() {
    let mut session = sample_session();

    assert_eq!(session.submit_word("pot"), 3);
    assert_eq!(session.submit_word("pot"), 0);
    assert_eq!(session.standings().len(), 1);
    assert_eq!(session.standings()[0].score, 3);
}

#[test]
fn test_word_outside_pool_letters_is_rejected() {
    let mut session = sample_session();

    // "toad" is in the dictionary but the pool has no 'd'.
    assert_eq!(session.submit_word("toad"), 0);
    assert!(session.standings().is_empty());
}

#[test]
fn test_tied_submissions_rank_in_submission_order() {
    let pool = LetterPool::from_letters("catbatpool").unwrap();
    let dictionary = Dictionary::from_words(["cat", "bat"]).unwrap();
    let mut session = GameSession::new(pool, dictionary);

    assert_eq!(session.submit_word("cat"), 3);
    assert_eq!(session.submit_word("bat"), 3);
    assert_eq!(session.standings()[0].word, "cat");
    assert_eq!(session.standings()[1].word, "bat");
}

#[test]
fn test_quit_command_is_not_a_word() {
    let session = sample_session();

    assert_eq!(QUIT_COMMAND, "quit!");
    // The sentinel could never validate anyway: '!' is not a pool letter.
    assert!(!session.dictionary().contains(QUIT_COMMAND));
}

#[test]
fn test_session_hint_uses_the_pool() {
    let mut session = sample_session();
    let hints = session.top_words(10);

    assert_eq!(hints[0], ("potato", 6));
    assert!(hints.iter().all(|(word, _)| *word != "toad"));

    // Hints are analysis only; the table is untouched.
    assert!(session.standings().is_empty());
    assert_eq!(session.submit_word("potato"), 6);
}

#[test]
fn test_end_to_end_with_embedded_dictionary() {
    let pool = LetterPool::from_letters("eatpotato").unwrap();
    let dictionary = load_dictionary().unwrap();
    let mut session = GameSession::new(pool, dictionary);

    assert_eq!(session.submit_word("pot"), 3);
    assert_eq!(session.standings()[0].word, "pot");

    assert_eq!(session.submit_word("zzz"), 0);
    assert_eq!(session.standings().len(), 1);

    assert_eq!(session.submit_word("potato"), 6);
    assert_eq!(session.standings()[0].word, "potato");
    assert_eq!(session.standings()[1].word, "pot");
}
