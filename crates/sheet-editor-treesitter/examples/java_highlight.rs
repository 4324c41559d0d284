use sheet_editor::{EditorHost, SessionConfig, SurfaceId};
use sheet_editor_treesitter::JavaSyntaxProcessor;

fn main() {
    let mut host = EditorHost::new();
    let handle = host.mount(
        SurfaceId::new(1),
        r#"
// a runnable snippet
public class Greeter {
    public static void main(String[] args) {
        System.out.println("hello, sheet");
    }
}
"#,
        SessionConfig::default(),
    );

    let mut processor = JavaSyntaxProcessor::new().expect("load java grammar");
    let session = host.session_mut(handle).expect("session is mounted");
    session
        .apply_processor(&mut processor)
        .expect("apply highlights/folds");

    println!(
        "highlight_spans={} fold_regions={}",
        session.highlight_spans().len(),
        session.fold_regions().len()
    );

    host.unmount(handle);
}
