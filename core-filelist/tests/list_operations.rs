//! Integration tests for ExtendedFileList over in-memory files

use bridge_native::{MemoryDataTransfer, MemoryFile, MemoryFileList};
use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::{FileHandle, FileTransfer, NativeFileList};
use core_filelist::{ClassifiedArg, ConcatItem, ExtendedFileList, FileListArg, FileListError};
use core_runtime::config::{ArgumentPolicy, FileListConfig};
use mockall::mock;

type List = ExtendedFileList<MemoryFile>;
type Arg = FileListArg<MemoryFileList>;

fn create_new_file(name: &str) -> MemoryFile {
    MemoryFile::new(name, "test").with_mime_type("text/plain")
}

fn files(count: usize) -> Vec<MemoryFile> {
    (0..count)
        .map(|i| create_new_file(&format!("example-{}.txt", i)))
        .collect()
}

fn abc() -> (MemoryFile, MemoryFile, MemoryFile) {
    (
        create_new_file("a.txt"),
        create_new_file("b.txt"),
        create_new_file("c.txt"),
    )
}

mock! {
    FileList {}

    impl NativeFileList for FileList {
        type File = MemoryFile;

        fn length(&self) -> usize;
        fn item(&self, index: usize) -> Option<MemoryFile>;
    }
}

/// Transfer object that refuses every file after the first `limit`
struct QuotaTransfer {
    inner: MemoryDataTransfer,
    limit: usize,
}

impl FileTransfer for QuotaTransfer {
    type File = MemoryFile;
    type List = MemoryFileList;

    fn create() -> BridgeResult<Self> {
        Err(BridgeError::NotAvailable("DataTransfer".to_string()))
    }

    fn add(&mut self, file: &MemoryFile) -> BridgeResult<()> {
        if self.inner.len() >= self.limit {
            return Err(BridgeError::OperationFailed("quota exceeded".to_string()));
        }
        self.inner.add(file)
    }

    fn into_files(self) -> BridgeResult<MemoryFileList> {
        self.inner.into_files()
    }
}

mod construction {
    use super::*;

    #[test]
    fn test_from_array() {
        let array = files(5);
        let subject = List::from_array(array.clone());

        assert_eq!(subject.to_array(), array);
        assert_eq!(subject.len(), 5);
    }

    #[test]
    fn test_constructor_with_sequence() {
        let array = files(3);
        let subject = List::new([Arg::Files(array.clone())]);

        assert_eq!(subject.to_array(), array);
    }

    #[test]
    fn test_from_file_list() {
        let array = files(4);
        let native = MemoryFileList::from(array.clone());
        let subject = List::from_file_list(native.clone());

        assert_eq!(subject.len(), 4);
        assert_eq!(subject.to_array(), array);
        assert_eq!(subject.to_file_list::<MemoryDataTransfer>().unwrap(), native);
    }

    #[test]
    fn test_from_single_file() {
        let file = create_new_file("example.txt");
        let subject = List::new([Arg::File(file.clone())]);

        assert_eq!(subject.len(), 1);
        assert_eq!(subject.get(0), Some(&file));
        assert_eq!(subject.to_array(), vec![file]);
    }

    #[test]
    fn test_mixed_arguments_flatten_in_order() {
        let (a, b, c) = abc();
        let d = create_new_file("d.txt");
        let native = MemoryFileList::from(vec![a.clone(), b.clone()]);

        let subject = List::new([
            Arg::Collection(native),
            Arg::File(c.clone()),
            Arg::Files(vec![d.clone(), a.clone()]),
        ]);

        assert_eq!(subject.to_array(), vec![a.clone(), b, c, d, a]);
    }

    #[test]
    fn test_collection_holes_are_skipped() {
        let (a, _, c) = abc();
        let mut native = MockFileList::new();
        native.expect_length().return_const(3usize);
        native.expect_item().returning(move |i| match i {
            0 => Some(a.clone()),
            2 => Some(c.clone()),
            _ => None,
        });

        let subject = List::from_file_list(native);
        assert_eq!(subject.len(), 2);
        assert_eq!(subject.get(1).map(|f| f.name()), Some("c.txt".to_string()));
    }

    #[test]
    fn test_malformed_argument_rejected_by_default() {
        let file = create_new_file("a.txt");
        let args: Vec<ClassifiedArg<MemoryFileList>> = vec![
            Arg::File(file).into(),
            ClassifiedArg::Malformed("number 42".to_string()),
        ];

        let err = List::from_classified(args, FileListConfig::default()).unwrap_err();
        match err {
            FileListError::InvalidArgument { position, reason } => {
                assert_eq!(position, 1);
                assert_eq!(reason, "number 42");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_argument_ignored_when_configured() {
        let (a, b, _) = abc();
        let config = FileListConfig::builder()
            .argument_policy(ArgumentPolicy::Ignore)
            .build();
        let args: Vec<ClassifiedArg<MemoryFileList>> = vec![
            Arg::File(a.clone()).into(),
            ClassifiedArg::Malformed("null".to_string()),
            Arg::Files(vec![b.clone()]).into(),
        ];

        let subject = List::from_classified(args, config).unwrap();
        assert_eq!(subject.to_array(), vec![a, b]);
        assert_eq!(subject.config(), &config);
    }
}

mod conversion {
    use super::*;

    #[test]
    fn test_to_array_is_a_fresh_vec() {
        let subject = List::from_array(files(2));
        let mut array = subject.to_array();
        array.clear();

        assert_eq!(subject.len(), 2);
    }

    #[test]
    fn test_to_file_list_from_single_file() {
        let subject = List::from_array([create_new_file("one.txt")]);
        let native = subject.to_file_list::<MemoryDataTransfer>().unwrap();

        assert_eq!(native.length(), 1);
    }

    #[test]
    fn test_file_list_round_trip() {
        let subject = List::from_array(files(6));
        let native = subject.to_file_list::<MemoryDataTransfer>().unwrap();

        assert_eq!(List::from_file_list(native), subject);
    }

    #[test]
    fn test_transfer_creation_failure() {
        let subject = List::from_array(files(1));
        let err = subject.to_file_list::<QuotaTransfer>().unwrap_err();

        assert!(matches!(err, FileListError::Transfer(BridgeError::NotAvailable(_))));
    }

    #[test]
    fn test_transfer_add_failure() {
        let subject = List::from_array(files(3));
        let transfer = QuotaTransfer {
            inner: MemoryDataTransfer::new(),
            limit: 2,
        };

        let err = subject.to_file_list_with(transfer).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }
}

mod mutation {
    use super::*;

    #[test]
    fn test_push_single_and_multiple() {
        let array = files(3);
        let additional = create_new_file("additional-file.txt");
        let mut subject = List::from_array(array.clone());

        assert_eq!(subject.push([additional.clone()]), 4);
        assert_eq!(subject.get(3), Some(&additional));

        assert_eq!(subject.push([additional.clone(), additional.clone()]), 6);
        assert_eq!(subject.get(5), Some(&additional));
        assert_eq!(subject.get(2), Some(&array[2]));
    }

    #[test]
    fn test_push_array_of_files() {
        let array = files(2);
        let more = files(3);
        let mut subject = List::from_array(array.clone());

        subject.push(more.clone());

        assert_eq!(subject.len(), 5);
        assert_eq!(subject.get(1), Some(&array[1]));
        assert_eq!(subject.get(4), Some(&more[2]));
    }

    #[test]
    fn test_pop_returns_last() {
        let (a, b, c) = abc();
        let mut subject = List::from_array([a, b.clone(), c.clone()]);

        assert_eq!(subject.pop(), Some(c));
        assert_eq!(subject.len(), 2);
        assert_eq!(subject.last(), Some(&b));
        assert_eq!(subject.get(2), None);
    }

    #[test]
    fn test_shift_compacts_indices() {
        let (a, b, c) = abc();
        let mut subject = List::from_array([a.clone(), b.clone(), c.clone()]);

        assert_eq!(subject.shift(), Some(a));
        assert_eq!(subject.len(), 2);
        assert_eq!(subject.get(0), Some(&b));
        assert_eq!(subject.get(1), Some(&c));
        assert_eq!(subject.get(2), None);
    }

    #[test]
    fn test_unshift_array_of_files() {
        let array = files(2);
        let more = files(3);
        let mut subject = List::from_array(array.clone());

        assert_eq!(subject.unshift(more.clone()), 5);
        assert_eq!(subject.get(0), Some(&more[0]));
        assert_eq!(subject.get(2), Some(&more[2]));
        assert_eq!(subject.get(3), Some(&array[0]));
    }

    #[test]
    fn test_reverse_mutates_in_place() {
        let (a, b, c) = abc();
        let mut subject = List::from_array([a.clone(), b.clone(), c.clone()]);

        subject.reverse();
        assert_eq!(subject.to_array(), vec![c, b, a]);
    }

    #[test]
    fn test_sort_returns_self_for_chaining() {
        let (a, b, c) = abc();
        let mut subject = List::from_array([c.clone(), a.clone(), b.clone()]);

        let length = subject.sort().reverse().len();
        assert_eq!(length, 3);
        assert_eq!(subject.to_array(), vec![c, b, a]);
    }

    #[test]
    fn test_sort_by_size() {
        let big = MemoryFile::new("big.bin", vec![0u8; 64]);
        let small = MemoryFile::new("small.bin", vec![0u8; 2]);
        let mut subject = List::from_array([big.clone(), small.clone()]);

        subject.sort_by(|a, b| a.size().cmp(&b.size()));
        assert_eq!(subject.to_array(), vec![small, big]);
    }
}

mod query {
    use super::*;

    #[test]
    fn test_slice_drops_ends() {
        let (a, b, c) = abc();
        let subject = List::from_array([a, b.clone(), c]);

        assert_eq!(subject.slice(Some(1), Some(-1)).to_array(), vec![b]);
        assert_eq!(subject.slice(None, None), subject);
        assert!(subject.slice(Some(2), Some(1)).is_empty());
    }

    #[test]
    fn test_concat_leaves_sources_untouched() {
        let (a, b, _) = abc();
        let d = create_new_file("d.txt");
        let e = create_new_file("e.txt");
        let subject = List::from_array([a.clone(), b.clone()]);
        let extra = vec![d.clone(), e.clone()];

        let combined = subject.concat([ConcatItem::from(&extra)]);

        assert_eq!(combined.to_array(), vec![a.clone(), b.clone(), d, e]);
        assert_eq!(subject.to_array(), vec![a, b]);
        assert_eq!(extra.len(), 2);
    }

    #[test]
    fn test_concat_mixed_items() {
        let (a, b, c) = abc();
        let first = List::from_array([a.clone()]);
        let second = List::from_array([b.clone()]);

        let combined = first.concat([
            ConcatItem::from(&second),
            ConcatItem::File(&c),
            ConcatItem::Files(&[a.clone()]),
        ]);

        assert_eq!(combined.to_array(), vec![a.clone(), b, c, a]);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_index_of() {
        let (a, b, c) = abc();
        let z = create_new_file("b.txt");
        let subject = List::from_array([a, b.clone(), c]);

        assert_eq!(subject.index_of(&b), Some(1));
        assert_eq!(subject.index_of(&z), None);
    }

    #[test]
    fn test_includes_uses_identity() {
        let (a, b, _) = abc();
        let lookalike = create_new_file("a.txt");
        let subject = List::from_array([a.clone(), b]);

        assert!(subject.includes(&a, None));
        assert!(!subject.includes(&lookalike, None));
        assert!(!subject.includes(&a, Some(-1)));
    }

    #[test]
    fn test_find_by_extension() {
        let image = MemoryFile::new("photo.png", "");
        let subject = List::from_array([create_new_file("a.txt"), image.clone()]);

        assert_eq!(subject.find(|f, _, _| f.name().ends_with(".png")), Some(&image));
        assert_eq!(subject.find(|f, _, _| f.name().ends_with(".gif")), None);
    }

    #[test]
    fn test_filter_true_yields_equal_copy() {
        let subject = List::from_array(files(4));
        let mut copy = subject.filter(|_, _, _| true);

        assert_eq!(copy, subject);
        copy.pop();
        assert_eq!(subject.len(), 4);
    }

    #[test]
    fn test_iteration_restarts() {
        let subject = List::from_array(files(3));

        let first: Vec<_> = subject.iter().map(|f| f.name()).collect();
        let second: Vec<_> = (&subject).into_iter().map(|f| f.name()).collect();
        assert_eq!(first, second);

        let mut count = 0;
        for _ in &subject {
            count += 1;
        }
        assert_eq!(count, 3);

        let owned: Vec<MemoryFile> = subject.clone().into_iter().collect();
        assert_eq!(owned, subject.to_array());
    }
}
