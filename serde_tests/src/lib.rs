#[cfg(test)]
mod tests {

    use ron;
    use rs_wordle_helper::*;

    #[test]
    fn constraint_serde() -> Result<(), WordleError> {
        let constraint = Constraint::from_strs("creep", "00100")?;

        let ser = ron::to_string(&constraint);
        assert!(ser.is_ok());

        let deser = ron::from_str::<Constraint>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), constraint);
        Ok(())
    }

    #[test]
    fn deserialized_constraint_filters_words() {
        let text = "(char_ids: (2, 17, 0, 13, 4), verdicts: (Absent, Absent, Present, Absent, Present))";

        let constraint = ron::from_str::<Constraint>(text).unwrap();
        let mut filter = WordFilter::new();
        filter.add_constraint(&constraint);

        assert_eq!(constraint.word(), "crane");
        assert_eq!(filter.apply(&["speak", "night", "xxxea"]), vec!["speak", "xxxea"]);
    }

    #[test]
    fn unknown_verdict_is_rejected() {
        let text = "(char_ids: (2, 17, 0, 13, 4), verdicts: (Absent, Absent, Missing, Absent, Present))";

        assert!(ron::from_str::<Constraint>(text).is_err());
    }

    #[test]
    fn out_of_alphabet_letter_id_is_rejected() {
        let text = "(char_ids: (30, 17, 0, 13, 4), verdicts: (Absent, Absent, Present, Absent, Present))";

        let deser = ron::from_str::<Constraint>(text);

        assert!(deser.is_err());
        assert!(deser
            .unwrap_err()
            .to_string()
            .contains("Letter id 30 is outside the alphabet"));
    }

    #[test]
    fn last_letter_id_is_accepted() {
        let text = "(char_ids: (25, 25, 25, 25, 25), verdicts: (Exact, Exact, Exact, Exact, Exact))";

        let constraint = ron::from_str::<Constraint>(text).unwrap();

        assert_eq!(constraint.word(), "zzzzz");
    }
}
