use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use vue_template_parser::{
    error::NoopErrorHandler, util::rslint::parse_js_expr, ParseOption, Parser, RootNode,
};

const TODO_ITEM: &str = r#"<li
  class="todo"
  v-for="(todo, index) in filteredTodos"
  :key="todo.id"
  :class="{ completed: todo.completed, editing: todo == editedTodo }"
>
  <div class="view">
    <input class="toggle" type="checkbox" v-model="todo.completed" />
    <label @dblclick="editTodo(todo)">{{ todo.title }} &ndash; #{{ index }}</label>
    <button class="destroy" @click.stop="removeTodo(todo)"></button>
  </div>
  <input
    class="edit"
    type="text"
    v-model.trim="todo.title"
    v-todo-focus="todo == editedTodo"
    @keyup.enter="doneEdit(todo)"
    @keyup.escape="cancelEdit(todo)"
  />
</li>"#;

const MARKDOWN: &str = r#"<div id="editor">
  <textarea :value="input" @input="update"></textarea>
  <div v-html="compiledMarkdown"></div>
  <svg viewBox="0 0 10 10"><foreignObject><p>&copy; 2021</p></foreignObject></svg>
  <!-- preview -->
  <script>if (a < b && c > d) { run() }</script>
</div>"#;

fn base_parse(source: &str, option: &ParseOption) -> RootNode {
    let parser = Parser::new(option.clone());
    parser.parse(source, NoopErrorHandler).node
}

fn bench_parse(c: &mut Criterion) {
    let with_expr = ParseOption::default();
    let without_expr = ParseOption::default().without_expression();
    for (name, source) in [("todo", TODO_ITEM), ("markdown", MARKDOWN)] {
        c.bench_with_input(BenchmarkId::new("parse", name), source, |b, s| {
            b.iter(|| base_parse(s, &with_expr));
        });
        c.bench_with_input(BenchmarkId::new("parse_no_expr", name), source, |b, s| {
            b.iter(|| base_parse(s, &without_expr));
        });
    }
}

fn bench_expression(c: &mut Criterion) {
    for expr in ["a", "editTodo(todo)", "{ completed: todo.completed }"] {
        c.bench_with_input(BenchmarkId::new("rslint", expr), expr, |b, e| {
            b.iter(|| parse_js_expr(e));
        });
    }
}

criterion_group!(benches, bench_parse, bench_expression);
criterion_main!(benches);
