#[cfg(test)]
mod tests {
    use byte_pattern_search::{
        search, search_automaton, search_kmp, Algorithm, AutomatonMatcher, KmpMatcher, MatchIter,
        Matcher, PatternError,
    };

    ///
    /// Naive scan used as the reference : check every starting position
    fn naive_search(pattern: &[u8], text: &[u8]) -> Vec<usize> {
        if pattern.len() > text.len() {
            return Vec::new();
        }
        (0..=text.len() - pattern.len())
            .filter(|&i| &text[i..i + pattern.len()] == pattern)
            .collect()
    }

    #[test]
    fn test_overlapping_occurrences() {
        assert_eq!(search_kmp(b"AA", b"AAAA").unwrap(), vec![0, 1, 2], "Case 1");
        assert_eq!(
            search_automaton(b"AA", b"AAAA").unwrap(),
            vec![0, 1, 2],
            "Case 2"
        );
    }

    #[test]
    fn test_no_occurrence() {
        assert_eq!(search_kmp(b"XYZ", b"ABCDEF").unwrap(), vec![], "Case 1");
        assert_eq!(search_automaton(b"XYZ", b"ABCDEF").unwrap(), vec![], "Case 2");
    }

    #[test]
    fn test_exact_full_match() {
        assert_eq!(search_kmp(b"ABC", b"ABC").unwrap(), vec![0], "Case 1");
        assert_eq!(search_automaton(b"ABC", b"ABC").unwrap(), vec![0], "Case 2");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(search_kmp(b"A", b"").unwrap(), vec![], "Case 1");
        assert_eq!(search_automaton(b"A", b"").unwrap(), vec![], "Case 2");
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert_eq!(search_kmp(b"ABCD", b"ABC").unwrap(), vec![], "Case 1");
        assert_eq!(search_automaton(b"ABCD", b"ABC").unwrap(), vec![], "Case 2");
    }

    #[test]
    fn test_empty_pattern_is_an_error() {
        assert_eq!(
            search_kmp(b"", b"ABC").unwrap_err(),
            PatternError::EmptyPattern,
            "Case 1"
        );
        assert_eq!(
            search_automaton(b"", b"ABC").unwrap_err(),
            PatternError::EmptyPattern,
            "Case 2"
        );
    }

    #[test]
    fn test_raw_bytes() {
        // Not valid UTF-8 anywhere : high bytes and a NUL inside the pattern
        let pattern = [0xFFu8, 0x00, 0x80];
        let text = [0xFFu8, 0x00, 0x80, 0xFF, 0x00, 0x80];
        assert_eq!(search_kmp(&pattern, &text).unwrap(), vec![0, 3], "Case 1");
        assert_eq!(
            search_automaton(&pattern, &text).unwrap(),
            vec![0, 3],
            "Case 2"
        );
    }

    #[test]
    fn test_both_scans_agree_with_reference() {
        // Every pattern of length 1..=3 over {a,b} against every text of
        // length 0..=8 over {a,b}
        for pat_len in 1..=3usize {
            for pat_bits in 0u32..(1 << pat_len) {
                let pattern: Vec<u8> = (0..pat_len)
                    .map(|i| if pat_bits & (1 << i) != 0 { b'a' } else { b'b' })
                    .collect();
                for text_len in 0..=8usize {
                    for text_bits in 0u32..(1 << text_len) {
                        let text: Vec<u8> = (0..text_len)
                            .map(|i| if text_bits & (1 << i) != 0 { b'a' } else { b'b' })
                            .collect();
                        let expected = naive_search(&pattern, &text);
                        let by_kmp = search_kmp(&pattern, &text).unwrap();
                        let by_fa = search_automaton(&pattern, &text).unwrap();
                        assert_eq!(by_kmp, expected, "KMP for {pattern:?} in {text:?}");
                        assert_eq!(by_fa, expected, "FA for {pattern:?} in {text:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_positions_ascending() {
        let text = b"abracadabra abracadabra";
        for positions in [
            search_kmp(b"abra", text).unwrap(),
            search_automaton(b"abra", text).unwrap(),
        ] {
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "not ascending : {positions:?}"
            );
        }
    }

    #[test]
    fn test_periodic_pattern() {
        // The worst case for a naive scan : long run of 'a' against a
        // pattern that almost always almost-matches
        let pattern = vec![b'a'; 50];
        let mut text = vec![b'a'; 2000];
        text.push(b'b');
        text.extend_from_slice(&vec![b'a'; 100]);
        let expected = naive_search(&pattern, &text);
        assert_eq!(search_kmp(&pattern, &text).unwrap(), expected, "Case 1");
        assert_eq!(
            search_automaton(&pattern, &text).unwrap(),
            expected,
            "Case 2"
        );
    }

    #[test]
    fn test_select_by_name() {
        let algorithm: Algorithm = "fa".parse().unwrap();
        assert_eq!(
            search(algorithm, b"aa", b"aaaa").unwrap(),
            vec![0, 1, 2],
            "Case 1"
        );
        let err = "boyer-moore".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err,
            PatternError::UnknownAlgorithm("boyer-moore".to_string()),
            "Case 2"
        );
    }

    #[test]
    fn test_lazy_iteration_stops_early() {
        // Taking only the first occurrence must not disturb anything
        let matcher = KmpMatcher::new(b"ab").unwrap();
        let first = MatchIter::new(matcher, b"xxabxxabxxab").next();
        assert_eq!(first, Some(2), "Case 1");

        let matcher = AutomatonMatcher::new(b"ab").unwrap();
        let two: Vec<usize> = MatchIter::new(matcher, b"xxabxxabxxab").take(2).collect();
        assert_eq!(two, vec![2, 6], "Case 2");
    }

    #[test]
    fn test_matchers_behind_the_trait() {
        // Drive both strategies through the same trait object
        let text = b"mississippi";
        for mut matcher in [
            Box::new(KmpMatcher::new(b"issi").unwrap()) as Box<dyn Matcher>,
            Box::new(AutomatonMatcher::new(b"issi").unwrap()) as Box<dyn Matcher>,
        ] {
            let mut found = Vec::new();
            for (pos, el) in text.iter().enumerate() {
                if let Some(start) = matcher.sequel(*el, pos) {
                    found.push(start);
                }
            }
            assert_eq!(found, vec![1, 4], "for pattern_len {}", matcher.pattern_len());
        }
    }
}
